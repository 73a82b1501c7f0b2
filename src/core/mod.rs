pub mod registry;
pub mod runner;

pub use crate::domain::model::{Principle, Transcript, Variant};
pub use crate::domain::ports::{Console, Demo, SharedConsole};
pub use crate::utils::error::Result;
