//! The five example pairs. Each module has a `before` variant that violates
//! its principle and an `after` variant that follows it; the two never share
//! state and never depend on another principle's module.

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;
