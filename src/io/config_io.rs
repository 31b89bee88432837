use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

/// Parse config text. Every table and key is optional.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load the config named on the command line, or defaults when none was given.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => read_config(p),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
show_key_hints = false

[ui.colors]
background = "#000000"
highlight = "#FF0000"

[log]
file = "/tmp/taskit.log"
level = "debug"
"##
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(sample_config()).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.log.file.as_deref(), Some("/tmp/taskit.log"));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[ui\nshow_key_hints = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_read_config_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.ui.colors.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_no_path_is_default() {
        let config = load_config(None).unwrap();
        assert!(config.ui.show_key_hints);
    }
}
