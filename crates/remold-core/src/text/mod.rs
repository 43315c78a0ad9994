//! Text algorithms shared by string and key transformers

pub mod ascii;
pub mod case;

pub use case::{words, Case};
