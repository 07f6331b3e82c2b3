//! Value model for decision inputs and results
//!
//! - `Value`: recursive variant carried in contexts and decision results
//! - `Number`: numeric leaves, typed or untyped depending on the wire format

pub mod number;
pub mod value;

pub use number::{Number, DECIMAL128_PRECISION};
pub use value::Value;
