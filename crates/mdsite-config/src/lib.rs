use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the site's inputs live and where the generated pages go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the markdown content tree.
    pub content_dir: PathBuf,
    /// HTML template containing `{{ Title }}` and `{{ Content }}`.
    pub template_path: PathBuf,
    /// Destination for generated pages; mirrors `content_dir`.
    pub output_dir: PathBuf,
    /// Assets copied verbatim into `output_dir` before generation.
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            static_dir: Some(PathBuf::from("static")),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "mdsite.toml";

    /// Loads the config at `config_path`, or `None` if there is no such file.
    ///
    /// Paths are shell-expanded, then relative ones are resolved against the
    /// directory holding the config file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Some(config.resolved(base)))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `mdsite.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    fn resolved(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| Self::resolve_path(&path, base);
        Self {
            content_dir: resolve(self.content_dir),
            template_path: resolve(self.template_path),
            output_dir: resolve(self.output_dir),
            static_dir: self.static_dir.map(resolve),
        }
    }

    fn resolve_path(path: &Path, base: &Path) -> PathBuf {
        let expanded = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
        if expanded.is_absolute() {
            expanded
        } else {
            base.join(expanded)
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
