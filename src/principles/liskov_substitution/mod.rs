//! Liskov Substitution: birds that may or may not fly.
//!
//! [`before::Bird`] promises flight to every bird, so a penguin has to break the
//! promise. [`after`] splits flight into its own capability.

pub mod after;
pub mod before;
