pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryConsole, StdoutConsole};
pub use config::DemoConfig;
pub use crate::core::{registry::build_demo, runner::DemoRunner};
pub use domain::model::{Principle, Transcript, Variant};
pub use utils::error::{Result, SolidError};

/// Runs one example with its built-in inputs, printing to stdout.
pub fn run_example(principle: Principle, variant: Variant) -> Result<()> {
    let demo = build_demo(principle, variant, &DemoConfig::default());
    DemoRunner::new(StdoutConsole::shared()).run(demo.as_ref())
}
