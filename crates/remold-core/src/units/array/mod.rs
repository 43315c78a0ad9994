//! Units that restructure objects and arrays
//!
//! Arrays are transparent to these units: recursion passes through array
//! elements and indices are never renamed.

pub mod flatten;
pub mod group;
pub mod key_case;
pub mod key_map;

pub use flatten::{FlattenOptions, FlattenUnit};
pub use group::{GroupOptions, GroupUnit};
pub use key_case::{KeyCaseOptions, KeyCaseUnit};
pub use key_map::{KeyMapOptions, KeyMapUnit};
