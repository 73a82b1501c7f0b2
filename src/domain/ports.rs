use crate::domain::model::{Principle, Variant};
use crate::utils::error::Result;
use std::sync::Arc;

/// Line-oriented output sink every example prints through.
pub trait Console: Send + Sync {
    fn print(&self, line: &str);

    fn blank_line(&self) {
        self.print("");
    }
}

pub type SharedConsole = Arc<dyn Console>;

/// One runnable example: a principle shown from one side of its before/after pair.
pub trait Demo {
    fn principle(&self) -> Principle;
    fn variant(&self) -> Variant;
    fn run(&self, console: SharedConsole) -> Result<()>;
}
