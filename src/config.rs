use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::scenarios::lsp::DEFAULT_SMS_LIMIT;
use crate::{DemoError, Result, Scenario};

/// Settings for a demo run, usually read from a TOML file.
///
/// ```toml
/// scenarios = ["lsp", "builder"]
/// color = false
/// pause_on_exit = true
/// sms_limit = 20
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub scenarios: Vec<Scenario>,
    pub color: bool,
    pub pause_on_exit: bool,
    pub sms_limit: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scenarios: Scenario::ALL.to_vec(),
            color: true,
            pause_on_exit: false,
            sms_limit: DEFAULT_SMS_LIMIT,
        }
    }
}

impl DemoConfig {
    /// An empty `scenarios` list means all of them, same as on the command line.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        if config.scenarios.is_empty() {
            config.scenarios = Scenario::ALL.to_vec();
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| DemoError::config(path, format!("cannot read file: {err}")))?;
        let config = Self::from_toml(&content).map_err(|err| DemoError::config(path, err.to_string()))?;
        config.validate(path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.sms_limit == 0 {
            return Err(DemoError::config(path, "sms_limit must be at least 1"));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, scenarios: &[Scenario], no_color: bool, pause: bool) -> Self {
        if !scenarios.is_empty() {
            self.scenarios = scenarios.to_vec();
        }
        if no_color {
            self.color = false;
        }
        if pause {
            self.pause_on_exit = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.scenarios, Scenario::ALL.to_vec());
        assert!(config.color);
        assert!(!config.pause_on_exit);
        assert_eq!(config.sms_limit, 20);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml("scenarios = [\"lsp\", \"builder\"]").unwrap();
        assert_eq!(config.scenarios, vec![Scenario::Lsp, Scenario::Builder]);
        assert!(config.color);
        assert_eq!(config.sms_limit, 20);
    }

    #[test]
    fn test_empty_scenario_list_means_all() {
        let config = DemoConfig::from_toml("scenarios = []").unwrap();
        assert_eq!(config.scenarios, Scenario::ALL.to_vec());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "scenarios = []").unwrap();
        let loaded = DemoConfig::load(file.path()).unwrap();
        assert_eq!(loaded.scenarios.len(), 6);
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        assert!(DemoConfig::from_toml("scenarios = [\"yagni\"]").is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(DemoConfig::from_toml("colour = false").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        writeln!(file, "pause_on_exit = true").unwrap();
        writeln!(file, "sms_limit = 10").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert!(!config.color);
        assert!(config.pause_on_exit);
        assert_eq!(config.sms_limit, 10);
        assert_eq!(config.scenarios.len(), 6);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sms_limit = \"twenty\"").unwrap();

        let err = DemoConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, DemoError::Config { .. }));
    }

    #[test]
    fn test_load_rejects_zero_sms_limit() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sms_limit = 0").unwrap();

        let err = DemoConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("sms_limit"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read file"));
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::default().with_overrides(&[Scenario::Dip], true, true);
        assert_eq!(config.scenarios, vec![Scenario::Dip]);
        assert!(!config.color);
        assert!(config.pause_on_exit);

        let untouched = DemoConfig::default().with_overrides(&[], false, false);
        assert_eq!(untouched, DemoConfig::default());
    }
}
