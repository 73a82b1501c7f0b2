use crate::principles::dependency_inversion::ProcessorKind;
use crate::principles::open_closed::{sample_catalog, Color, Product, Size};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for every example. An empty file yields the built-in values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub journal: JournalConfig,
    pub catalog: CatalogConfig,
    pub payments: PaymentsConfig,
    pub birds: BirdsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub entries: Vec<String>,
    pub remove_index: usize,
    pub destination: String,
    pub overwrite: bool,
    pub load_file: Option<String>,
    pub load_url: Option<String>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                "Completed GitHub advance course".to_string(),
                "Completed ReactNative course".to_string(),
            ],
            remove_index: 1,
            destination: "myJournal.txt".to_string(),
            overwrite: false,
            load_file: None,
            load_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: Vec<Product>,
    pub color: Color,
    pub size: Size,
    pub combined_color: Color,
    pub combined_size: Size,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: sample_catalog(),
            color: Color::Orange,
            size: Size::Small,
            combined_color: Color::Green,
            combined_size: Size::Small,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentsConfig {
    pub transactions: Vec<TransactionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionConfig {
    pub processor: ProcessorKind,
    pub amount: f64,
    pub refund: Option<f64>,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            transactions: vec![
                TransactionConfig {
                    processor: ProcessorKind::Paypal,
                    amount: 100.0,
                    refund: Some(80.0),
                },
                TransactionConfig {
                    processor: ProcessorKind::Stripe,
                    amount: 200.0,
                    refund: Some(75.0),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdsConfig {
    pub flying: String,
    pub flightless: String,
}

impl Default for BirdsConfig {
    fn default() -> Self {
        Self {
            flying: "Sparrow".to_string(),
            flightless: "Penguin".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolidError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_path("journal.destination", &self.journal.destination)?;
        if let Some(load_file) = &self.journal.load_file {
            validate_path("journal.load_file", load_file)?;
        }
        if let Some(load_url) = &self.journal.load_url {
            validate_url("journal.load_url", load_url)?;
        }

        for product in &self.catalog.products {
            validate_non_empty_string("catalog.products.name", &product.name)?;
        }

        validate_non_empty_string("birds.flying", &self.birds.flying)?;
        validate_non_empty_string("birds.flightless", &self.birds.flightless)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[journal]
entries = ["one", "two", "three"]
remove_index = 0

[catalog]
color = "green"
size = "medium"
products = [
    { name = "Kiwi", color = "green", size = "small" },
    { name = "Melon", color = "green", size = "medium" },
]

[[payments.transactions]]
processor = "stripe"
amount = 12.5
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.journal.entries.len(), 3);
        assert_eq!(config.journal.remove_index, 0);
        assert_eq!(config.journal.destination, "myJournal.txt");
        assert_eq!(config.catalog.color, Color::Green);
        assert_eq!(config.catalog.size, Size::Medium);
        assert_eq!(config.catalog.products[1].name, "Melon");
        assert_eq!(config.payments.transactions.len(), 1);
        assert_eq!(config.payments.transactions[0].processor, ProcessorKind::Stripe);
        assert_eq!(config.payments.transactions[0].refund, None);
        assert_eq!(config.birds, BirdsConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SOLID_TEST_JOURNAL_FILE", "fromEnv.txt");

        let toml_content = r#"
[journal]
destination = "${SOLID_TEST_JOURNAL_FILE}"
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.journal.destination, "fromEnv.txt");

        std::env::remove_var("SOLID_TEST_JOURNAL_FILE");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let config = DemoConfig::from_toml_str(
            "[birds]\nflying = \"${SOLID_TEST_UNSET_VARIABLE}\"\n",
        )
        .unwrap();
        assert_eq!(config.birds.flying, "${SOLID_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = DemoConfig::from_toml_str("[catalog]\ncolor = \"blue\"\n");
        assert!(matches!(result, Err(SolidError::TomlError(_))));
    }

    #[test]
    fn test_config_validation() {
        let config = DemoConfig::from_toml_str(
            "[journal]\nload_url = \"not a url\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = DemoConfig::from_toml_str("[birds]\nflightless = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[birds]\nflying = \"Swallow\"\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.birds.flying, "Swallow");
        assert_eq!(config.birds.flightless, "Penguin");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DemoConfig::from_file("/definitely/not/here/solid.toml");
        assert!(matches!(result, Err(SolidError::IoError(_))));
    }
}
