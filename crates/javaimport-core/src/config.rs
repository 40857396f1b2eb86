//! Configuration management for javaimport.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for javaimport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Package filter settings.
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Package exclude/include lists.
///
/// Entries are dotted package names (`java.lang`). An include entry only
/// matters for paths that some exclude entry already rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Packages to skip.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Packages to keep even though an exclude entry covers them.
    #[serde(default)]
    pub includes: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;

        config.filter.normalize();

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Append packages given on the command line.
    ///
    /// Each argument is a comma-separated list, as accepted by `-e`/`-i`.
    pub fn merge_cli(&mut self, excludes: &[String], includes: &[String]) {
        for arg in excludes {
            self.filter
                .excludes
                .extend(crate::filter::parse_package_list(arg));
        }
        for arg in includes {
            self.filter
                .includes
                .extend(crate::filter::parse_package_list(arg));
        }
    }
}

impl FilterConfig {
    /// Trim surrounding spaces and dots from every entry.
    fn normalize(&mut self) {
        for pkg in self.excludes.iter_mut().chain(self.includes.iter_mut()) {
            *pkg = pkg.trim_matches(|c| c == ' ' || c == '.').to_string();
        }
    }
}
