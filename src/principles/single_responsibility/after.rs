use super::print_journal;
use crate::config::toml_config::JournalConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::validate_url;
use std::fmt;
use url::Url;

/// Read surface a journal exposes to collaborators.
pub trait JournalEntries {
    fn entries(&self) -> &[String];
}

/// Numbered journal entries. Knows nothing about storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `"{n}: {text}"` and returns the entry's index.
    ///
    /// `n` keeps increasing after removals, so numbers are never reused.
    pub fn add_entry(&mut self, text: &str) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
        self.count - 1
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(SolidError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl JournalEntries for Journal {
    fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

/// Saves and loads journals. Only announces what it would do.
pub struct Persistence {
    console: SharedConsole,
}

impl Persistence {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn save<J>(&self, journal: &J, filename: &str, overwrite: bool)
    where
        J: JournalEntries + ?Sized,
    {
        tracing::debug!(
            "Saving {} entries (overwrite: {})",
            journal.entries().len(),
            overwrite
        );
        self.console.print(&format!("Saving journal to {}", filename));
    }

    pub fn load_from_file(&self, filename: &str) {
        self.console.print(&format!("Loading journal from {}", filename));
    }

    pub fn load_from_url(&self, url: &Url) {
        self.console.print(&format!("Loading journal from {}", url));
    }
}

pub struct JournalDemo {
    config: JournalConfig,
}

impl JournalDemo {
    pub fn new(config: JournalConfig) -> Self {
        Self { config }
    }
}

impl Demo for JournalDemo {
    fn principle(&self) -> Principle {
        Principle::SingleResponsibility
    }

    fn variant(&self) -> Variant {
        Variant::After
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let mut journal = Journal::new();
        for text in &self.config.entries {
            journal.add_entry(text);
        }
        print_journal(console.as_ref(), journal.entries());

        let removed = journal.remove_entry(self.config.remove_index)?;
        tracing::debug!("Removed entry '{}'", removed);
        print_journal(console.as_ref(), journal.entries());

        let persistence = Persistence::new(console);
        persistence.save(&journal, &self.config.destination, self.config.overwrite);

        if let Some(filename) = &self.config.load_file {
            persistence.load_from_file(filename);
        }
        if let Some(url) = &self.config.load_url {
            let url = validate_url("journal.load_url", url)?;
            persistence.load_from_url(&url);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use std::sync::Arc;

    #[test]
    fn test_add_entry_returns_increasing_indices() {
        let mut journal = Journal::new();
        assert_eq!(journal.add_entry("first"), 0);
        assert_eq!(journal.add_entry("second"), 1);
        assert_eq!(journal.add_entry("third"), 2);
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_remove_entry_keeps_order() {
        let mut journal = Journal::new();
        journal.add_entry("e0");
        journal.add_entry("e1");
        journal.add_entry("e2");

        let removed = journal.remove_entry(1).unwrap();

        assert_eq!(removed, "2: e1");
        assert_eq!(journal.entries(), ["1: e0", "3: e2"]);
    }

    #[test]
    fn test_remove_entry_out_of_range() {
        let mut journal = Journal::new();
        journal.add_entry("only");

        let err = journal.remove_entry(1).unwrap_err();
        assert!(matches!(err, SolidError::EntryOutOfRange { index: 1, len: 1 }));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_numbering_continues_after_removal() {
        let mut journal = Journal::new();
        journal.add_entry("a");
        journal.add_entry("b");
        journal.remove_entry(1).unwrap();

        // the counter, not the current length, drives both values
        assert_eq!(journal.add_entry("c"), 2);
        assert_eq!(journal.to_string(), "1: a\n3: c");
    }

    #[test]
    fn test_persistence_only_prints() {
        let console = MemoryConsole::new();
        let persistence = Persistence::new(Arc::new(console.clone()));
        let mut journal = Journal::new();
        journal.add_entry("kept");

        persistence.save(&journal, "myJournal.txt", false);
        persistence.load_from_file("myJournal.txt");
        persistence.load_from_url(&Url::parse("https://example.com/journal").unwrap());

        assert_eq!(
            console.lines(),
            vec![
                "Saving journal to myJournal.txt",
                "Loading journal from myJournal.txt",
                "Loading journal from https://example.com/journal",
            ]
        );
        assert!(!std::path::Path::new("myJournal.txt").exists());
    }
}
