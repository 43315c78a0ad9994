//! Units that operate on string values

pub mod case;
pub mod mask;
pub mod slug;
pub mod template;

pub use case::{CaseOptions, CaseUnit};
pub use mask::{apply_mask, MaskOptions, MaskUnit};
pub use slug::{SlugOptions, SlugUnit};
pub use template::{MissingValueHandler, TemplateOptions, TemplateUnit};
