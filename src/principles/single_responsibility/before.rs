use super::print_journal;
use crate::config::toml_config::JournalConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::validate_url;
use std::fmt;
use url::Url;

/// Keeps entries and also saves and loads itself.
pub struct Journal {
    entries: Vec<String>,
    count: usize,
    console: SharedConsole,
}

impl Journal {
    pub fn new(console: SharedConsole) -> Self {
        Self {
            entries: Vec::new(),
            count: 0,
            console,
        }
    }

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

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    // Storage concerns below change for reasons unrelated to journaling.

    pub fn save(&self, filename: &str, overwrite: bool) {
        tracing::debug!("Saving {} entries (overwrite: {})", self.entries.len(), overwrite);
        self.console.print(&format!("Saving journal to {}", filename));
    }

    pub fn load_from_file(&self, filename: &str) {
        self.console.print(&format!("Loading journal from {}", filename));
    }

    pub fn load_from_url(&self, url: &Url) {
        self.console.print(&format!("Loading journal from {}", url));
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
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
        Variant::Before
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let mut journal = Journal::new(console.clone());
        for text in &self.config.entries {
            journal.add_entry(text);
        }
        print_journal(console.as_ref(), journal.entries());

        journal.remove_entry(self.config.remove_index)?;
        print_journal(console.as_ref(), journal.entries());

        journal.save(&self.config.destination, self.config.overwrite);

        if let Some(filename) = &self.config.load_file {
            journal.load_from_file(filename);
        }
        if let Some(url) = &self.config.load_url {
            let url = validate_url("journal.load_url", url)?;
            journal.load_from_url(&url);
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
    fn test_journal_saves_itself() {
        let console = MemoryConsole::new();
        let mut journal = Journal::new(Arc::new(console.clone()));
        assert_eq!(journal.add_entry("Completed GitHub advance course"), 0);
        assert_eq!(journal.add_entry("Completed ReactNative course"), 1);

        journal.save("myJournal.txt", false);

        assert_eq!(
            journal.to_string(),
            "1: Completed GitHub advance course\n2: Completed ReactNative course"
        );
        assert_eq!(console.lines(), vec!["Saving journal to myJournal.txt"]);
    }
}
