use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Names of the functions that mark a string literal as translatable.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
    #[serde(default = "default_plural_suffixes")]
    pub plural_suffixes: Vec<String>,
    /// Spaces per indentation level when rewriting the reference file.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// File extensions scanned when a directory is passed as a source.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_markers() -> Vec<String> {
    ["_t", "_td", "_tJsx"].map(String::from).to_vec()
}

fn default_plural_suffixes() -> Vec<String> {
    ["|zero", "|one", "|other"].map(String::from).to_vec()
}

fn default_indent() -> usize {
    4
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            plural_suffixes: default_plural_suffixes(),
            indent: default_indent(),
            extensions: default_extensions(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Markers are spliced into the extraction regex, so they must be plain
    /// JavaScript identifiers.
    pub fn validate(&self) -> Result<()> {
        if self.markers.is_empty() {
            bail!("'markers' must list at least one function name");
        }
        for marker in &self.markers {
            if !IDENTIFIER.is_match(marker) {
                bail!(
                    "Invalid function name in 'markers': \"{}\" is not an identifier",
                    marker
                );
            }
        }

        if self.plural_suffixes.iter().any(String::is_empty) {
            bail!("'pluralSuffixes' must not contain empty suffixes");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
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
    /// Where the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Load the config file named on the command line, or discover one upward
/// from `start_dir`.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
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
