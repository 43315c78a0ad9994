//! Built-in leaf units
//!
//! Every unit here follows the same shape: a `*Options` struct deserializable
//! from camelCase JSON, a `*Unit` that implements [`crate::Configurable`] and
//! [`crate::Unit`], and a fallback value reported with an invalid status
//! whenever the input has the wrong type.

pub mod array;
pub mod data;
pub mod string;

pub use array::{FlattenUnit, GroupUnit, KeyCaseUnit, KeyMapUnit};
pub use data::{DateUnit, JsonUnit, NumberUnit};
pub use string::{CaseUnit, MaskUnit, SlugUnit, TemplateUnit};
