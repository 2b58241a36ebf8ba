//! Generator configuration (`luagd.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, SKIPPED_CLASSES, error::SourceContext};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "luagd.toml";

/// Root of `luagd.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub bindgen: BindgenConfig,
}

/// Where to read the API dump from.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_api_path")]
    pub path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            path: default_api_path(),
        }
    }
}

/// Where and how to write the binding tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Pretty-print the JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            pretty: true,
        }
    }
}

/// Binding generation options.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindgenConfig {
    /// Builtin classes that map to Luau primitives and get no bindings.
    #[serde(default = "default_skip_classes")]
    pub skip_classes: Vec<String>,

    /// Treat unresolvable property accessors as errors instead of warnings.
    #[serde(default)]
    pub strict_accessors: bool,
}

impl Default for BindgenConfig {
    fn default() -> Self {
        Self {
            skip_classes: default_skip_classes(),
            strict_accessors: false,
        }
    }
}

fn default_api_path() -> PathBuf {
    PathBuf::from("extension_api.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("gen")
}

fn default_true() -> bool {
    true
}

fn default_skip_classes() -> Vec<String> {
    SKIPPED_CLASSES.iter().map(|s| s.to_string()).collect()
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load the config, falling back to defaults when the file is absent.
    ///
    /// An explicitly requested path must exist; the default `luagd.toml` may not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| source_ctx.config_error(e))
}
