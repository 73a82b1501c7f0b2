use crate::adapters::MemoryConsole;
use crate::core::{Demo, Result, SharedConsole, Transcript};
use std::sync::Arc;

pub struct DemoRunner {
    console: SharedConsole,
}

impl DemoRunner {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn run(&self, demo: &dyn Demo) -> Result<()> {
        tracing::debug!("Running {} example ({})", demo.principle(), demo.variant());

        demo.run(self.console.clone()).map_err(|e| {
            tracing::error!(
                "{} example ({}) failed: {}",
                demo.principle(),
                demo.variant(),
                e
            );
            e
        })?;

        tracing::debug!("{} example ({}) finished", demo.principle(), demo.variant());
        Ok(())
    }

    /// Runs a demo against a fresh in-memory console and returns what it printed.
    pub fn capture(demo: &dyn Demo) -> Result<Transcript> {
        let console = MemoryConsole::new();
        DemoRunner::new(Arc::new(console.clone())).run(demo)?;

        Ok(Transcript {
            principle: demo.principle(),
            variant: demo.variant(),
            lines: console.take_lines(),
        })
    }
}
