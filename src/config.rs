use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::HtError;

/// Data file used when nothing else is configured, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "tracked_hours.json";

/// Environment variable overriding the data file location
pub const DATA_FILE_ENV: &str = "HT_DATA_FILE";

pub const DEFAULT_DAILY_CAP_HOURS: u32 = 12;
pub const DEFAULT_UTILIZATION_RATE: f64 = 0.89;

/// Runtime configuration
///
/// Resolved from (highest precedence first) the `--file` flag, the
/// `HT_DATA_FILE` environment variable, and the rc file at `~/.ht/rc`:
///
/// ```text
/// # ~/.ht/rc
/// data.location=work/tracked_hours.json
/// track.daily_cap_hours=10
/// pto.utilization_rate=0.9
/// ```
///
/// Relative `data.location` paths resolve against the rc file's directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub daily_cap_hours: u32,
    pub utilization_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            daily_cap_hours: DEFAULT_DAILY_CAP_HOURS,
            utilization_rate: DEFAULT_UTILIZATION_RATE,
        }
    }
}

impl Config {
    /// Get the rc file path, if a home directory can be determined
    pub fn rc_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ht").join("rc"))
    }

    /// Resolve configuration from the rc file, environment and an explicit override
    pub fn resolve(file_override: Option<&Path>) -> Result<Config> {
        let mut config = match Self::rc_path() {
            Some(rc) if rc.exists() => {
                log::debug!("Reading configuration from {}", rc.display());
                let content = std::fs::read_to_string(&rc)
                    .with_context(|| format!("Failed to read config file: {}", rc.display()))?;
                let base = rc.parent().unwrap_or_else(|| Path::new("."));
                Self::parse_rc(&content, base)?
            }
            _ => Config::default(),
        };

        if let Some(path) = std::env::var_os(DATA_FILE_ENV) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(path) = file_override {
            config.data_path = path.to_path_buf();
        }

        log::debug!("Using data file {}", config.data_path.display());
        Ok(config)
    }

    /// Parse rc file content; `base` is the directory relative data paths resolve against
    pub fn parse_rc(content: &str, base: &Path) -> Result<Config> {
        let mut config = Config::default();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = index + 1;
            let Some((key, value)) = line.split_once('=') else {
                return Err(HtError::InvalidConfig(format!(
                    "line {}: '{}'. Expected key=value.",
                    line_no, line
                ))
                .into());
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "data.location" => {
                    let path = PathBuf::from(value);
                    config.data_path = if path.is_relative() {
                        base.join(path)
                    } else {
                        path
                    };
                }
                "track.daily_cap_hours" => {
                    config.daily_cap_hours = value
                        .parse::<u32>()
                        .ok()
                        .filter(|h| (1..=24).contains(h))
                        .ok_or_else(|| {
                            HtError::InvalidConfig(format!(
                                "{} on line {}: '{}'. Expected hours between 1 and 24.",
                                key, line_no, value
                            ))
                        })?;
                }
                "pto.utilization_rate" => {
                    config.utilization_rate = value
                        .parse::<f64>()
                        .ok()
                        .filter(|r| (0.0..=1.0).contains(r))
                        .ok_or_else(|| {
                            HtError::InvalidConfig(format!(
                                "{} on line {}: '{}'. Expected a number between 0 and 1.",
                                key, line_no, value
                            ))
                        })?;
                }
                _ => log::warn!("Ignoring unknown config key '{}' on line {}", key, line_no),
            }
        }

        Ok(config)
    }
}
