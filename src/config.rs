use crate::error::{Result, SchildkroeteError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// `/closeonend:` value TortoiseGitProc gets unless the config overrides it:
/// close the progress dialog automatically if no errors occurred.
pub const DEFAULT_CLOSE_ON_END: u8 = 2;

/// User configuration, read fresh on every invocation from
/// `<config_dir>/schildkroete/config.toml`. A missing file is the default
/// config; the program never writes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// TortoiseGitProc executable, overriding registry and PATH discovery.
    #[serde(default)]
    pub tool_path: Option<PathBuf>,

    /// `/closeonend:` value passed to the tool.
    #[serde(default)]
    pub close_on_end: Option<u8>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| SchildkroeteError::ConfigError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn close_on_end(&self) -> u8 {
        self.close_on_end.unwrap_or(DEFAULT_CLOSE_ON_END)
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("schildkroete").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_is_default_config() {
        let config = Config::load_from(Path::new("/no/such/config.toml")).unwrap();

        assert_eq!(config.tool_path, None);
        assert_eq!(config.close_on_end(), DEFAULT_CLOSE_ON_END);
    }

    #[test]
    fn test_full_config_parses() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "tool_path = \"/opt/tortoisegit/TortoiseGitProc\"\nclose_on_end = 0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(
            config.tool_path,
            Some(PathBuf::from("/opt/tortoisegit/TortoiseGitProc"))
        );
        assert_eq!(config.close_on_end(), 0);
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tool_path = [not toml").unwrap();

        let result = Config::load_from(&path);

        assert!(matches!(
            result,
            Err(SchildkroeteError::ConfigError { .. })
        ));
    }
}
