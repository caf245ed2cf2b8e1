//! Tree-walking interpreter.
//!
//! - environment: the scope chain holding variables
//! - interpreter: evaluates statements and expressions
//! - native: host functions reachable through `<native>` declarations
pub mod environment;
pub mod interpreter;
pub mod native;
