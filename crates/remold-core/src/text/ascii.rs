//! ASCII folding tables
//!
//! Latin accents fold to their closest ASCII letter so that word-boundary
//! detection behaves the same regardless of the source alphabet. Slugs use a
//! wider table that also transliterates Greek and a few symbols.

/// Latin-1 and Latin Extended-A letters with a reasonable ASCII spelling
fn fold_latin_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' | 'Ć' | 'Č' => "C",
        'ç' | 'ć' | 'č' => "c",
        'Ð' | 'Ď' | 'Đ' => "D",
        'ð' | 'ď' | 'đ' => "d",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => "E",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'Ğ' => "G",
        'ğ' => "g",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' | 'İ' => "I",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'Ł' | 'Ľ' => "L",
        'ł' | 'ľ' => "l",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ñ' | 'ń' | 'ň' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ő' | 'Ø' | 'Ō' => "O",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ő' | 'ø' | 'ō' => "o",
        'Œ' => "OE",
        'œ' => "oe",
        'Ř' => "R",
        'ř' => "r",
        'Ś' | 'Š' | 'Ş' => "S",
        'ś' | 'š' | 'ş' => "s",
        'ß' => "ss",
        'Ť' | 'Ţ' => "T",
        'ť' | 'ţ' => "t",
        'Þ' => "TH",
        'þ' => "th",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ű' | 'Ū' | 'Ů' | 'Ų' => "U",
        'ù' | 'ú' | 'û' | 'ü' | 'ű' | 'ū' | 'ů' | 'ų' => "u",
        'Ý' | 'Ÿ' => "Y",
        'ý' | 'ÿ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

/// Greek letters and symbols that only slugs transliterate
fn fold_slug_extra(c: char) -> Option<&'static str> {
    let folded = match c {
        '©' => "(c)",
        'Α' => "A", 'Β' => "B", 'Γ' => "G", 'Δ' => "D", 'Ε' => "E", 'Ζ' => "Z",
        'Η' => "H", 'Θ' => "8", 'Ι' => "I", 'Κ' => "K", 'Λ' => "L", 'Μ' => "M",
        'Ν' => "N", 'Ξ' => "3", 'Ο' => "O", 'Π' => "P", 'Ρ' => "R", 'Σ' => "S",
        'Τ' => "T", 'Υ' => "Y", 'Φ' => "F", 'Χ' => "X", 'Ψ' => "PS", 'Ω' => "W",
        'α' => "a", 'β' => "b", 'γ' => "g", 'δ' => "d", 'ε' => "e", 'ζ' => "z",
        'η' => "h", 'θ' => "8", 'ι' => "i", 'κ' => "k", 'λ' => "l", 'μ' => "m",
        'ν' => "n", 'ξ' => "3", 'ο' => "o", 'π' => "p", 'ρ' => "r", 'σ' | 'ς' => "s",
        'τ' => "t", 'υ' => "y", 'φ' => "f", 'χ' => "x", 'ψ' => "ps", 'ω' => "w",
        _ => return None,
    };
    Some(folded)
}

fn fold_with(input: &str, table: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match table(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

/// Replace accented Latin letters with their ASCII spelling
pub fn fold_accents(input: &str) -> String {
    if input.is_ascii() {
        return input.to_string();
    }
    fold_with(input, fold_latin_char)
}

/// Accent folding plus Greek transliteration, used when building slugs
pub fn fold_for_slug(input: &str) -> String {
    if input.is_ascii() {
        return input.to_string();
    }
    fold_with(input, |c| fold_latin_char(c).or_else(|| fold_slug_extra(c)))
}
