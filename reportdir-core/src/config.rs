use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory under which `Claude/<skill>/<YYYYMMDD>` trees are created.
    /// Defaults to the platform temporary-storage root (see [`Config::default_root`]).
    pub root: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// An unreadable or malformed file is logged and the defaults are used instead.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file_paths())
    }

    /// Like [`Config::load`], reading the first existing file among `candidates`.
    fn load_from(candidates: &[PathBuf]) -> Self {
        let file_config = Self::read_file_config(candidates).unwrap_or_else(|e| {
            tracing::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });

        Self {
            root: file_config.root.unwrap_or_else(Self::default_root),
        }
    }

    /// Fixed temporary-storage root:
    /// - Windows: `C:\tmp`
    /// - elsewhere: `/tmp`
    pub fn default_root() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from(r"C:\tmp")
        } else {
            PathBuf::from("/tmp")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("reportdir")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("reportdir").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file among `candidates` and parse it.
    fn read_file_config(candidates: &[PathBuf]) -> Result<FileConfig> {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
