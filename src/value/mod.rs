//! Runtime values.
//!
//! - number: 32-bit integer and float wrappers with type-guarded arithmetic
//! - value: the closed set of values the interpreter produces

pub mod number;
pub mod value;

#[cfg(test)]
mod tests;
