//! Units that parse and format dates, numbers and JSON text

pub mod date;
pub mod json;
pub mod number;

pub use date::{DateOptions, DateUnit};
pub use json::{JsonOptions, JsonUnit};
pub use number::{NumberOptions, NumberUnit};
