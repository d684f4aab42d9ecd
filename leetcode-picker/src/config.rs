use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use getset::{CopyGetters, Getters};
use leetcode_picker_utils::fs_json_util::read_toml_or_default;
use log::debug;
use serde::Deserialize;

pub const DATA_DIR_NAME: &str = ".leetcode-picker";
pub const DATA_FILE_NAME: &str = "problems.csv";
pub const AUTH_FILE_NAME: &str = "auth.json";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `~/.leetcode-picker`, or `./.leetcode-picker` if the home directory is unknown.
pub fn data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map_or_else(PathBuf::new, PathBuf::from)
        .join(DATA_DIR_NAME)
}

pub fn default_data_path() -> PathBuf {
    data_dir().join(DATA_FILE_NAME)
}

pub fn default_auth_path() -> PathBuf {
    data_dir().join(AUTH_FILE_NAME)
}

pub fn default_config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

/// Tunables read from `config.toml`. Every key is optional.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Getters, CopyGetters)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[getset(get_copy = "pub")]
    politeness_delay_secs: u64,
    #[getset(get_copy = "pub")]
    page_timeout_secs: u64,
    #[getset(get_copy = "pub")]
    api_timeout_secs: u64,
    #[getset(get = "pub")]
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            politeness_delay_secs: 1,
            page_timeout_secs: 30,
            api_timeout_secs: 10,
            user_agent: concat!("leetcode-picker/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = read_toml_or_default(path)?;
        debug!("Config: {config:?}");
        Ok(config)
    }

    pub fn politeness_delay(&self) -> Duration {
        Duration::from_secs(self.politeness_delay_secs)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }
}
