use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::ExtractOptions;

pub const CONFIG_FILE_NAME: &str = ".jarlocrc.json";

pub const DEFAULT_MARKER: &str = "Lcom/jcwhatever/nucleus/utils/language/Localizable;";

pub const DEFAULT_OUTPUT: &str = "lang.keys.txt";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub strict_annotation_arguments: bool,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            output: default_output(),
            ignores: Vec::new(),
            strict_annotation_arguments: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the marker is not a class descriptor or any glob
    /// pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        validate_marker(&self.marker)?;

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            marker: self.marker.clone(),
            ignores: self.ignores.clone(),
            strict_arguments: self.strict_annotation_arguments,
        }
    }
}

/// Check that `marker` looks like `Lpkg/Name;`.
pub fn validate_marker(marker: &str) -> Result<()> {
    let valid = marker
        .strip_prefix('L')
        .and_then(|rest| rest.strip_suffix(';'))
        .is_some_and(|name| !name.is_empty() && !name.contains(['.', ';', '[']));

    if !valid {
        bail!(
            "Invalid marker descriptor: \"{}\" (expected a form like \"Lcom/example/Localizable;\")",
            marker
        );
    }
    Ok(())
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

/// Load the nearest config file, or the defaults when there is none.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
