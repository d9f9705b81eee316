use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rolodex_core::domain::DEFAULT_PROFILE_PICTURE;
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_TICK_RATE_MS: u64 = 200;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 5_000;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_demo_contacts: bool,
    pub placeholder_picture: String,
    pub tick_rate_ms: u64,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_contacts: true,
            placeholder_picture: DEFAULT_PROFILE_PICTURE.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
                file: None,
            },
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
    #[error("invalid tick_rate_ms value: {0}")]
    InvalidTickRate(u64),
    #[error("placeholder_picture cannot be empty")]
    EmptyPlaceholderPicture,
    #[error("logging.level cannot be empty")]
    EmptyLogLevel,
    #[error("invalid logging.level value: {0}")]
    InvalidLogLevel(String),
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

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    seed_demo_contacts: Option<bool>,
    placeholder_picture: Option<String>,
    tick_rate_ms: Option<u64>,
    logging: Option<LoggingFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingFile {
    level: Option<String>,
    file: Option<PathBuf>,
}

/// Loads the config file. Without an explicit path a missing file (or an
/// unresolvable config dir) falls back to defaults; an explicit path must
/// exist.
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

    if let Some(seed) = parsed.seed_demo_contacts {
        config.seed_demo_contacts = seed;
    }

    if let Some(picture) = parsed.placeholder_picture {
        let picture = picture.trim();
        if picture.is_empty() {
            return Err(ConfigError::EmptyPlaceholderPicture);
        }
        config.placeholder_picture = picture.to_string();
    }

    if let Some(tick_rate) = parsed.tick_rate_ms {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick_rate) {
            return Err(ConfigError::InvalidTickRate(tick_rate));
        }
        config.tick_rate_ms = tick_rate;
    }

    if let Some(logging) = parsed.logging {
        if let Some(level) = logging.level {
            let level = level.trim();
            if level.is_empty() {
                return Err(ConfigError::EmptyLogLevel);
            }
            if level.parse::<LevelFilter>().is_err() {
                return Err(ConfigError::InvalidLogLevel(level.to_string()));
            }
            config.logging.level = level.to_string();
        }
        if let Some(file) = logging.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(file));
            }
            config.logging.file = Some(file);
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, AppConfig, ConfigError, ConfigFile, LoggingFile};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            seed_demo_contacts: Some(false),
            placeholder_picture: Some(" /me.svg ".to_string()),
            tick_rate_ms: Some(50),
            logging: Some(LoggingFile {
                level: Some("debug".to_string()),
                file: Some(PathBuf::from("/tmp/rolodex.log")),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(!merged.seed_demo_contacts);
        assert_eq!(merged.placeholder_picture, "/me.svg");
        assert_eq!(merged.tick_rate_ms, 50);
        assert_eq!(merged.logging.level, "debug");
        assert_eq!(
            merged.logging.file.as_deref(),
            Some(std::path::Path::new("/tmp/rolodex.log"))
        );
    }

    #[test]
    fn merge_config_empty_file_is_default() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged, AppConfig::default());
    }

    #[test]
    fn merge_config_rejects_unknown_log_level() {
        let parsed = ConfigFile {
            logging: Some(LoggingFile {
                level: Some("wrn".to_string()),
                file: None,
            }),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "wrn"));

        let parsed = ConfigFile {
            logging: Some(LoggingFile {
                level: Some("TRACE".to_string()),
                file: None,
            }),
            ..ConfigFile::default()
        };
        assert_eq!(merge_config(parsed).expect("merge").logging.level, "TRACE");
    }

    #[test]
    fn merge_config_rejects_out_of_range_tick_rate() {
        let parsed = ConfigFile {
            tick_rate_ms: Some(0),
            ..Default::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTickRate(0)));
    }

    #[test]
    fn merge_config_rejects_blank_placeholder() {
        let parsed = ConfigFile {
            placeholder_picture: Some("  ".to_string()),
            ..Default::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPlaceholderPicture));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_missing_optional_file_is_none() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "seed_demo_contacts = false\ntick_rate_ms = 100\n[logging]\nlevel = \"info\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(!config.seed_demo_contacts);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "database = \"rolodex.sqlite3\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
