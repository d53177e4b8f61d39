use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.toml";
const LOCAL_BASE_URL: &str = "http://127.0.0.1:1111";

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    pub title: String,
    pub base_url: Url,
    #[serde(default)]
    pub arrows: Arrows,
}

/// Glyphs drawn next to the previous and next links.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Arrows {
    pub left: String,
    pub right: String,
}

impl Default for Arrows {
    fn default() -> Self {
        Self {
            left: "◄".to_string(),
            right: "►".to_string(),
        }
    }
}

impl Config {
    /// Reads `config.toml` from the course directory. With `local` set the
    /// base url points at a local development server instead.
    pub fn load(home: &Path, local: bool) -> Result<Self> {
        let config_file = home.join(CONFIG_FILENAME);
        let config_text = fs::read_to_string(&config_file)?;
        let mut config: Config = toml::from_str(&config_text)?;

        if local {
            config.base_url = Url::from_str(LOCAL_BASE_URL)?;
        }

        debug!("loaded config from {}", config_file.display());

        Ok(config)
    }
}
