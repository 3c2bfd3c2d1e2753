use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SCRIPT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_LIST_LIMIT: usize = 50;

const MAX_TIMEOUT_SECS: u64 = 3600;
const MAX_LIST_LIMIT: usize = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interpreter binary; defaults to /usr/bin/osascript when unset.
    pub interpreter: Option<PathBuf>,
    pub script_timeout_secs: u64,
    pub lookup_timeout_secs: u64,
    pub list_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interpreter: None,
            script_timeout_secs: DEFAULT_SCRIPT_TIMEOUT_SECS,
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid timeout value: {0}")]
    InvalidTimeout(u64),
    #[error("invalid list_limit value: {0}")]
    InvalidListLimit(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    interpreter: Option<PathBuf>,
    script_timeout_secs: Option<u64>,
    lookup_timeout_secs: Option<u64>,
    list_limit: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(interpreter) = parsed.interpreter {
        config.interpreter = Some(interpreter);
    }

    if let Some(secs) = parsed.script_timeout_secs {
        config.script_timeout_secs = validate_timeout(secs)?;
    }

    if let Some(secs) = parsed.lookup_timeout_secs {
        config.lookup_timeout_secs = validate_timeout(secs)?;
    }

    if let Some(limit) = parsed.list_limit {
        if limit == 0 || limit > MAX_LIST_LIMIT {
            return Err(ConfigError::InvalidListLimit(limit));
        }
        config.list_limit = limit;
    }

    Ok(config)
}

fn validate_timeout(secs: u64) -> Result<u64> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout(secs));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigFile};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            interpreter: Some(PathBuf::from("/opt/bin/osascript")),
            script_timeout_secs: Some(30),
            lookup_timeout_secs: Some(60),
            list_limit: Some(200),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(
            merged.interpreter,
            Some(PathBuf::from("/opt/bin/osascript"))
        );
        assert_eq!(merged.script_timeout_secs, 30);
        assert_eq!(merged.lookup_timeout_secs, 60);
        assert_eq!(merged.list_limit, 200);
    }

    #[test]
    fn merge_config_rejects_zero_timeout() {
        let parsed = ConfigFile {
            interpreter: None,
            script_timeout_secs: Some(0),
            lookup_timeout_secs: None,
            list_limit: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid timeout"));
    }

    #[test]
    fn merge_config_rejects_zero_list_limit() {
        let parsed = ConfigFile {
            interpreter: None,
            script_timeout_secs: None,
            lookup_timeout_secs: None,
            list_limit: Some(0),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid list_limit"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "script_timeout_secs = 45\nlist_limit = 25\n").expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.script_timeout_secs, 45);
        assert_eq!(config.list_limit, 25);
    }

    #[test]
    fn load_at_path_yields_defaults_when_absent_and_optional() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let loaded = load_at_path(&missing, false).expect("load");
        assert!(loaded.is_none());
    }
}
