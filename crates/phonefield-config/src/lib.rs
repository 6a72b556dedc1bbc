use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use phonefield_core::mask::{MaskKind, MaskOptions, OverflowPolicy, TemplateMask};
use phonefield_core::VerificationOptions;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonefield";
const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_ENV: &str = "PHONEFIELD_CONFIG";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub phone: MaskOptions,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Default)]
pub struct FormConfig {
    pub verification_options: VerificationOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid placeholder_char value: {0:?}")]
    InvalidPlaceholderChar(String),
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
    phone: Option<PhoneFile>,
    form: Option<FormFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhoneFile {
    mask: Option<MaskKind>,
    overflow: Option<OverflowPolicy>,
    placeholder_char: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormFile {
    verification_options: Option<VerificationOptions>,
}

/// Where the config file was found. Locations named by the user must exist;
/// the per-user default may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    Flag(PathBuf),
    Env(PathBuf),
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Flag(path)
            | ConfigLocation::Env(path)
            | ConfigLocation::Default(path) => path,
        }
    }

    fn is_required(&self) -> bool {
        !matches!(self, ConfigLocation::Default(_))
    }
}

pub fn load(flag: Option<PathBuf>) -> Result<AppConfig> {
    match locate(flag)? {
        Some(location) => read_config(&location),
        None => Ok(AppConfig::default()),
    }
}

/// `--config` wins over `PHONEFIELD_CONFIG`, which wins over
/// `$XDG_CONFIG_HOME/phonefield/config.toml` (or `~/.config/...`).
pub fn locate(flag: Option<PathBuf>) -> Result<Option<ConfigLocation>> {
    if let Some(path) = flag {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return Ok(Some(ConfigLocation::Flag(path)));
    }

    if let Some(path) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Ok(Some(ConfigLocation::Env(PathBuf::from(path))));
    }

    Ok(user_config_dir()
        .map(|dir| ConfigLocation::Default(dir.join(APP_DIR).join(CONFIG_FILENAME))))
}

fn user_config_dir() -> Option<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}

pub fn read_config(location: &ConfigLocation) -> Result<AppConfig> {
    let path = location.path();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if location.is_required() {
                return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
            }
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(phone) = parsed.phone {
        if let Some(mask) = phone.mask {
            config.phone.kind = mask;
        }
        if let Some(overflow) = phone.overflow {
            config.phone.overflow = overflow;
        }
        if let Some(raw) = phone.placeholder_char {
            config.phone.placeholder = parse_placeholder(&raw)?;
        }
    }

    if let Some(form) = parsed.form {
        if let Some(verification_options) = form.verification_options {
            config.form.verification_options = verification_options;
        }
    }

    Ok(config)
}

fn parse_placeholder(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(ConfigError::InvalidPlaceholderChar(raw.to_string()));
    };
    TemplateMask::new(ch).map_err(|_| ConfigError::InvalidPlaceholderChar(raw.to_string()))?;
    Ok(ch)
}
