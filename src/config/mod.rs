mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

const DEFAULT_LIBRARY_FILE: &str = "songs.csv";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub library_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub library_path: PathBuf,
    pub history_path: Option<PathBuf>,
    pub random_seed: Option<u64>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; the library file falls
    /// back to `songs.csv` in the working directory.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let library_path = file
            .library_path
            .map(PathBuf::from)
            .or_else(|| cli.library_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE));

        // The file itself may not exist yet, but its directory must.
        if let Some(parent) = library_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                bail!("Library directory does not exist: {:?}", parent);
            }
        }

        let history_path = file
            .history_path
            .map(PathBuf::from)
            .or_else(|| cli.history_path.clone());

        let random_seed = file.random_seed.or(cli.random_seed);

        Ok(AppConfig {
            library_path,
            history_path,
            random_seed,
        })
    }
}
