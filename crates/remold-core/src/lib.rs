//! Remold Core - Composable value transformation units
//!
//! This crate provides small, configurable transformation units over JSON
//! values and the composites that combine them.
//!
//! # Main Components
//!
//! - **Unit contract**: [`Unit`] returns a value plus a [`Status`]; data
//!   problems never raise, they flip the status to a stable error key
//! - **Leaf units**: case, mask, slug, template, key-case, flatten, group,
//!   key-map, date, number and JSON transforms
//! - **Composites**: [`Chain`] for sequences, [`Conditional`] for
//!   predicate-guarded delegation
//! - **Field pipeline**: applies unit lists to the fields of an object and
//!   aggregates a [`TransformationResult`]
//!
//! # Example
//!
//! ```
//! use remold_core::{Case, CaseUnit, Chain, ConfigureFromJson, SlugUnit, Unit};
//! use serde_json::json;
//!
//! fn example() -> remold_core::Result<()> {
//!     let mut slug = SlugUnit::default();
//!     slug.configure_json(json!({"separator": "_"}))?;
//!
//!     let chain = Chain::new().then(CaseUnit::new(Case::Title)).then(slug);
//!     let processed = chain.process(json!("hello rust world"))?;
//!     assert_eq!(processed.value, json!("hello_rust_world"));
//!     assert!(processed.is_valid());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod composite;
pub mod error;
pub mod pipeline;
pub mod result;
pub mod text;
pub mod unit;
pub mod units;

// Re-export main types for convenience
pub use composite::{try_when, when, Chain, ChainOptions, Conditional, ConditionalOptions, Predicate};
pub use error::{Error, Result};
pub use pipeline::{FieldPipeline, FieldRule, FieldRuleBuilder};
pub use result::{ErrorDetail, FieldOutcome, TransformationResult};
pub use text::Case;
pub use unit::{
    keys, Configurable, ConfigureFromJson, FnUnit, Processed, SharedUnit, Status, Tracked, Unit,
};
pub use units::{
    CaseUnit, DateUnit, FlattenUnit, GroupUnit, JsonUnit, KeyCaseUnit, KeyMapUnit, MaskUnit,
    NumberUnit, SlugUnit, TemplateUnit,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
