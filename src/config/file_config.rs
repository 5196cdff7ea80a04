use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Every field may be omitted; present values
/// override the matching CLI arguments.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub library_path: Option<String>,
    pub history_path: Option<String>,
    pub random_seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_partial_config() {
        let config: FileConfig = toml::from_str(
            r#"
            library_path = "/tmp/songs.csv"
            random_seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.library_path.as_deref(), Some("/tmp/songs.csv"));
        assert_eq!(config.history_path, None);
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn an_empty_config_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.library_path, None);
        assert_eq!(config.history_path, None);
        assert_eq!(config.random_seed, None);
    }
}
