use crate::core::parser::ParseOptions;
use crate::core::schedule::ViewOptions;
use crate::errors::{AppError, AppResult};
use crate::utils::date::DEFAULT_DAY_LABEL_FORMAT;
use crate::utils::time::{DEFAULT_CLOCK_FORMAT, is_valid_clock_pattern, is_valid_date_pattern};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Field separator of the input; `auto` detects it from the header line.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_delimiter() -> String {
    "auto".to_string()
}
fn default_time_format() -> String {
    DEFAULT_CLOCK_FORMAT.to_string()
}
fn default_date_format() -> String {
    DEFAULT_DAY_LABEL_FORMAT.to_string()
}
fn default_show_icons() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            show_icons: default_show_icons(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimecard`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimecard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` unless a file is already there.
    /// Returns `true` when a new file was written.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        Ok(true)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.delimiter_byte()?;

        if !is_valid_clock_pattern(&self.time_format) {
            return Err(AppError::Config(format!(
                "invalid time_format: {}",
                self.time_format
            )));
        }
        if !is_valid_date_pattern(&self.date_format) {
            return Err(AppError::Config(format!(
                "invalid date_format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// `None` means auto-detect.
    pub fn delimiter_byte(&self) -> AppResult<Option<u8>> {
        match self.delimiter.as_str() {
            "auto" | "" => Ok(None),
            "tab" | "\\t" | "\t" => Ok(Some(b'\t')),
            d if d.len() == 1 && d.is_ascii() => Ok(Some(d.as_bytes()[0])),
            other => Err(AppError::Config(format!("invalid delimiter: {}", other))),
        }
    }

    pub fn parse_options(&self) -> AppResult<ParseOptions> {
        Ok(ParseOptions {
            delimiter: self.delimiter_byte()?,
        })
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            clock_format: self.time_format.clone(),
            day_label_format: self.date_format.clone(),
            show_icons: self.show_icons,
        }
    }
}
