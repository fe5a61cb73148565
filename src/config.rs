use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Markdown tree to render
    pub content_dir: PathBuf,
    /// Copied verbatim into the output before rendering
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
    /// Replaces the leading `/` of root-relative `href` and `src` values.
    pub basepath: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            basepath: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, falling back to the bundled defaults if
    /// it is missing or invalid.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::compiled_default()
            }),
            Err(_) => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::compiled_default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The bundled `default_config.toml`.
    pub fn compiled_default() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }
}
