//! Canonical case conversion
//!
//! Word-based cases (camel, Pascal, snake, kebab) go through a tokenizer that
//! splits on separators and on case transitions, so `helloWORLDTest`,
//! `hello_world_test` and `Hello World Test` all produce the same three words.
//! Whole-string cases (lower, upper, title, sentence) map characters in place.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use super::ascii::fold_accents;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target case for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `hello world`
    #[default]
    Lower,
    /// `HELLO WORLD`
    Upper,
    /// `Hello World`
    Title,
    /// `Hello world`
    Sentence,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
}

impl Case {
    /// Every supported case, in declaration order
    pub const ALL: [Case; 8] = [
        Case::Lower,
        Case::Upper,
        Case::Title,
        Case::Sentence,
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Kebab,
    ];

    /// Name used in options and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Lower => "lower",
            Case::Upper => "upper",
            Case::Title => "title",
            Case::Sentence => "sentence",
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
        }
    }

    /// Convert `input` to this case
    pub fn apply(&self, input: &str) -> String {
        match self {
            Case::Lower => input.to_lowercase(),
            Case::Upper => input.to_uppercase(),
            Case::Title => to_title(input),
            Case::Sentence => to_sentence(input),
            Case::Camel => to_camel(input),
            Case::Pascal => to_pascal(input),
            Case::Snake => to_snake(input),
            Case::Kebab => to_kebab(input),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Case::ALL
            .iter()
            .copied()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| Error::Configuration {
                message: format!(
                    "Unknown case '{}', expected one of: {}",
                    s,
                    Case::ALL.map(|c| c.as_str()).join(", ")
                ),
                unit: None,
            })
    }
}

/// Split `input` into lowercase words.
///
/// Boundaries are runs of `-`, `_` or whitespace, a lowercase letter or digit
/// followed by an uppercase letter (`aB`), and the last letter of an
/// uppercase run when a lowercase letter follows it (`ABc` splits as `A|Bc`).
/// Any other punctuation is dropped without splitting, so `don't` stays one
/// word. Accented Latin letters are folded to ASCII first.
pub fn words(input: &str) -> Vec<String> {
    let folded = fold_accents(input);
    let chars: Vec<char> = folded
        .chars()
        .filter(|c| c.is_alphanumeric() || is_separator(*c))
        .collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            flush(&mut current, &mut words);
            continue;
        }

        // current is non-empty only when chars[i - 1] was pushed into it
        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                flush(&mut current, &mut words);
            }
        }

        current.push(c);
    }

    flush(&mut current, &mut words);
    words
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(current.to_lowercase());
        current.clear();
    }
}

/// Uppercase the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn to_snake(input: &str) -> String {
    words(input).join("_")
}

pub fn to_kebab(input: &str) -> String {
    words(input).join("-")
}

pub fn to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

pub fn to_pascal(input: &str) -> String {
    words(input).iter().map(|w| capitalize(w)).collect()
}

/// Capitalize each whitespace-delimited word; whitespace is kept verbatim
pub fn to_title(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

pub fn to_sentence(input: &str) -> String {
    capitalize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_separators() {
        assert_eq!(words("hello_world-foo bar"), vec!["hello", "world", "foo", "bar"]);
        assert_eq!(words("__hello--world  "), vec!["hello", "world"]);
    }

    #[test]
    fn test_words_drop_other_punctuation() {
        assert_eq!(words("don't stop"), vec!["dont", "stop"]);
        assert_eq!(Case::Camel.apply("don't stop"), "dontStop");
        assert_eq!(Case::Snake.apply("user.name"), "username");
        assert_eq!(Case::Snake.apply("v1.2-beta"), "v12_beta");
        assert_eq!(Case::Kebab.apply("hello.World"), "hello-world");
    }

    #[test]
    fn test_words_case_transitions() {
        assert_eq!(words("helloWorld"), vec!["hello", "world"]);
        assert_eq!(words("helloWORLDTest"), vec!["hello", "world", "test"]);
        assert_eq!(words("XMLHttpRequest"), vec!["xml", "http", "request"]);
        assert_eq!(words("hello123World"), vec!["hello123", "world"]);
        assert_eq!(words("ABC"), vec!["abc"]);
    }

    #[test]
    fn test_words_folds_accents() {
        assert_eq!(words("olá_mundo"), vec!["ola", "mundo"]);
        assert_eq!(words("ÉcoleNormale"), vec!["ecole", "normale"]);
    }

    #[test]
    fn test_word_based_cases() {
        assert_eq!(Case::Snake.apply("helloWorld"), "hello_world");
        assert_eq!(Case::Kebab.apply("helloWorld"), "hello-world");
        assert_eq!(Case::Camel.apply("hello_world"), "helloWorld");
        assert_eq!(Case::Pascal.apply("hello_world"), "HelloWorld");
        assert_eq!(Case::Camel.apply("Hello World Test"), "helloWorldTest");
        assert_eq!(Case::Snake.apply("hello123World"), "hello123_world");
    }

    #[test]
    fn test_whole_string_cases() {
        assert_eq!(Case::Lower.apply("Hello World"), "hello world");
        assert_eq!(Case::Upper.apply("Hello World"), "HELLO WORLD");
        assert_eq!(Case::Title.apply("hello wORLD"), "Hello World");
        assert_eq!(Case::Title.apply("hello  big-world"), "Hello  Big-world");
        assert_eq!(Case::Sentence.apply("hELLO World"), "Hello world");
        assert_eq!(Case::Upper.apply("ação"), "AÇÃO");
    }

    #[test]
    fn test_empty_input() {
        for case in Case::ALL {
            assert_eq!(case.apply(""), "", "case {}", case);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("kebab".parse::<Case>().unwrap(), Case::Kebab);
        let err = "shouty".parse::<Case>().unwrap_err();
        assert!(err.to_string().contains("Unknown case 'shouty'"));
    }
}
