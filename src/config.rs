use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::resolve::FactoryPattern;

pub const CONFIG_FILE_NAME: &str = ".siftrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_template_extension")]
    pub template_extension: String,
    #[serde(default = "default_factory_module")]
    pub factory_module: String,
    #[serde(default = "default_factory_names")]
    pub factory_names: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_extension() -> String {
    ".go".to_string()
}

fn default_template_extension() -> String {
    ".html".to_string()
}

fn default_factory_module() -> String {
    FactoryPattern::default().module
}

fn default_factory_names() -> Vec<String> {
    FactoryPattern::default().names
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            template_extension: default_template_extension(),
            factory_module: default_factory_module(),
            factory_names: default_factory_names(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, if the
    /// factory selector is incomplete, or if an extension lacks its leading dot.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.factory_module.trim().is_empty() {
            bail!("'factoryModule' must not be empty");
        }
        if self.factory_names.is_empty() || self.factory_names.iter().any(|n| n.trim().is_empty())
        {
            bail!("'factoryNames' must list at least one non-empty name");
        }

        for (field, ext) in [
            ("sourceExtension", &self.source_extension),
            ("templateExtension", &self.template_extension),
        ] {
            if !ext.starts_with('.') || ext.len() < 2 {
                bail!("'{}' must start with a dot, e.g. \".go\": \"{}\"", field, ext);
            }
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
    }

    pub fn factory_pattern(&self) -> FactoryPattern {
        FactoryPattern::new(&self.factory_module, self.factory_names.clone())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, or None when using defaults.
    pub path: Option<PathBuf>,
}

/// Read and validate a specific config file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: read_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
