//! Configuration at ~/.config/lunar-birthday/config.toml

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BirthdayError, BirthdayResult};
use crate::ics::DEFAULT_UID_DOMAIN;
use crate::request::{DEFAULT_REMIND_OFFSET, DEFAULT_YEARS, RequestDefaults, parse_remind_offset};

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

fn default_years() -> u32 {
    DEFAULT_YEARS
}

fn default_remind_offset() -> String {
    DEFAULT_REMIND_OFFSET.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where .ics files are written; the working directory when unset.
    pub output_dir: Option<PathBuf>,

    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,

    #[serde(default = "default_years")]
    pub default_years: u32,

    #[serde(default = "default_remind_offset")]
    pub default_remind_offset: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: None,
            uid_domain: default_uid_domain(),
            default_years: default_years(),
            default_remind_offset: default_remind_offset(),
        }
    }
}

impl Config {
    pub fn config_path() -> BirthdayResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BirthdayError::Config("Could not determine config directory".into()))?
            .join("lunar-birthday");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from the default location, or defaults if there is no file.
    pub fn load() -> BirthdayResult<Self> {
        match dirs::config_dir() {
            Some(_) => Self::load_from(&Self::config_path()?),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> BirthdayResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| BirthdayError::file_io(path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> BirthdayResult<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| BirthdayError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> BirthdayResult<()> {
        if self.default_years < 1 {
            return Err(BirthdayError::Config("default_years must be at least 1".into()));
        }
        if self.uid_domain.trim().is_empty() {
            return Err(BirthdayError::Config("uid_domain must not be empty".into()));
        }
        parse_remind_offset(&self.default_remind_offset, DEFAULT_REMIND_OFFSET)
            .map_err(|e| BirthdayError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults {
            years: self.default_years,
            remind_offset: self.default_remind_offset.clone(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
