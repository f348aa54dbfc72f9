use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_casing")]
    pub casing: String,

    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub drop_vowels: bool,
}

fn default_casing() -> String {
    "camel".to_string()
}

fn default_separator() -> String {
    "_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            casing: default_casing(),
            separator: default_separator(),
            drop_vowels: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        casing: Option<String>,
        separator: Option<String>,
        drop_vowels: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".casefmt.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(casing) = casing {
            config.casing = casing;
        }
        if let Some(separator) = separator {
            config.separator = separator;
        }
        if drop_vowels {
            config.drop_vowels = true;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.casing != default_casing() {
            self.casing = other.casing;
        }
        if other.separator != default_separator() {
            self.separator = other.separator;
        }
        if other.drop_vowels {
            self.drop_vowels = true;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casefmt").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
