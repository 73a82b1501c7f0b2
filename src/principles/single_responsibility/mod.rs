//! Single Responsibility: a journal and where it gets saved.
//!
//! In [`before`] the journal both keeps entries and knows how to persist them.
//! In [`after`] persistence moves to [`after::Persistence`], which only reads
//! entries through [`after::JournalEntries`].

pub mod after;
pub mod before;

use crate::domain::ports::Console;

pub(crate) fn print_journal(console: &dyn Console, entries: &[String]) {
    console.print("=====");
    if entries.is_empty() {
        console.blank_line();
    }
    for entry in entries {
        console.print(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_print_journal_with_entries() {
        let console = MemoryConsole::new();
        print_journal(&console, &["1: a".to_string(), "2: b".to_string()]);
        assert_eq!(console.lines(), vec!["=====", "1: a", "2: b"]);
    }

    #[test]
    fn test_print_empty_journal_keeps_body_line() {
        let console = MemoryConsole::new();
        print_journal(&console, &[]);
        assert_eq!(console.lines(), vec!["=====", ""]);
    }
}
