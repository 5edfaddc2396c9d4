//! Configuration file loading.
//!
//! The file lives at `~/.config/oncall/config.yml` unless another path is
//! given on the command line:
//!
//! ```yaml
//! opsGenie:
//!   apiKey: <key>
//!   apiUrl: https://api.eu.opsgenie.com   # optional
//! teamNames: [sre, platform]
//! timezone: Europe/Zurich                 # optional
//! ```

use std::io;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

use rota_adapters::opsgenie::DEFAULT_API_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not determine home directory")]
    NoHome,
    #[error("read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("no teams configured")]
    NoTeams,
    #[error("unknown timezone: {0}")]
    Timezone(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpsGenieConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub ops_genie: OpsGenieConfig,
    #[serde(default)]
    pub team_names: Vec<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// `~/.config/oncall/config.yml`
pub fn default_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".config").join("oncall").join("config.yml"))
        .ok_or(ConfigError::NoHome)
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_path_buf()))
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.team_names.is_empty() {
            return Err(ConfigError::NoTeams);
        }
        Ok(config)
    }

    pub fn api_url(&self) -> &str {
        self.ops_genie.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Display timezone; `None` means the machine's local time.
    pub fn timezone(&self) -> Result<Option<Tz>, ConfigError> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| ConfigError::Timezone(name.to_string()))
            })
            .transpose()
    }
}
