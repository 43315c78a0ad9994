//! Units built out of other units

pub mod chain;
pub mod conditional;

pub use chain::{Chain, ChainOptions};
pub use conditional::{try_when, when, Conditional, ConditionalOptions, Predicate};
