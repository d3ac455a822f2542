use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lunar_birthday_core::config::Config;
use lunar_birthday_core::ics::IcsOptions;
use lunar_birthday_core::lunar::ChineseCalendar;
use lunar_birthday_core::{Exported, PersonRequest, RequestDefaults, export_request};

/// Everything a run needs besides the requests themselves.
pub struct Settings {
    pub calendar: ChineseCalendar,
    pub defaults: RequestDefaults,
    pub options: IcsOptions,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Load the config file and apply command line overrides.
    pub fn load(
        config_path: Option<&Path>,
        output_dir: Option<PathBuf>,
        uid_domain: Option<&str>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::load().context("Failed to load config")?,
        };
        Ok(Self::from_config(config, output_dir, uid_domain))
    }

    pub fn from_config(config: Config, output_dir: Option<PathBuf>, uid_domain: Option<&str>) -> Self {
        let today = chrono::Local::now().date_naive();
        let options = IcsOptions::new(today).with_uid_domain(uid_domain.unwrap_or(&config.uid_domain));

        Settings {
            calendar: ChineseCalendar::new(),
            defaults: config.request_defaults(),
            options,
            output_dir: output_dir.unwrap_or_else(|| config.output_dir()),
        }
    }

    pub fn export(&self, request: &PersonRequest) -> Result<Exported> {
        export_request(&self.calendar, request, &self.options, &self.output_dir)
            .with_context(|| format!("Failed to generate the calendar for {}", request.name))
    }
}
