//! Request-handling helpers shared across controllers and parameter types.

pub mod extract;
pub mod validate;
