use crate::domain::ports::{Console, SharedConsole};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn shared() -> SharedConsole {
        Arc::new(Self)
    }
}

impl Console for StdoutConsole {
    fn print(&self, line: &str) {
        println!("{}", line);
    }
}

/// Records every printed line in order.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn take_lines(&self) -> Vec<String> {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *lines)
    }
}

impl Console for MemoryConsole {
    fn print(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_keeps_order() {
        let console = MemoryConsole::new();
        console.print("first");
        console.blank_line();
        console.print("second");

        assert_eq!(console.lines(), vec!["first", "", "second"]);
    }

    #[test]
    fn test_memory_console_clones_share_buffer() {
        let console = MemoryConsole::new();
        let shared: SharedConsole = Arc::new(console.clone());
        shared.print("via shared handle");

        assert_eq!(console.take_lines(), vec!["via shared handle"]);
        assert!(console.lines().is_empty());
    }
}
