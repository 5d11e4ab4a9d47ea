use fast_config::Config;
use log::error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::command::VpnCommands;
use crate::targets::TargetPolicy;

// Configuration data saved to JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigData {
    #[serde(default)] // Ensure field exists even if missing in JSON
    pub commands: VpnCommands,
    #[serde(default = "default_countries_file")]
    pub countries_file: String, // Relative to the data directory unless absolute
    #[serde(default = "default_icons_dir")]
    pub icons_dir: String,
    #[serde(default)]
    pub target_policy: TargetPolicy,
}

fn default_countries_file() -> String {
    "countries.json".to_string()
}

fn default_icons_dir() -> String {
    "icons".to_string()
}

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            commands: VpnCommands::default(),
            countries_file: default_countries_file(),
            icons_dir: default_icons_dir(),
            target_policy: TargetPolicy::default(),
        }
    }
}

impl ConfigData {
    pub fn countries_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.countries_file)
    }

    pub fn icons_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.icons_dir)
    }
}

/// Where the bundled list and icons live: the explicit directory if given,
/// otherwise next to the executable when the list is there, otherwise the
/// `data/` directory shipped with the sources.
pub fn resolve_data_dir(explicit: Option<&Path>, countries_file: &str) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .filter(|dir| dir.join(countries_file).is_file());
    match beside_exe {
        Some(dir) => dir,
        None => bundled_data_dir(),
    }
}

pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Opens (or creates) the config file. On failure the error is logged and
/// the caller runs on in-memory defaults.
pub fn open_config(path: &str) -> Option<Config<ConfigData>> {
    match Config::new(path, ConfigData::default()) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!("Error creating config file at {}: {}. Using defaults.", path, e);
            None
        }
    }
}

pub fn config_file_path() -> String {
    let config_dir = dirs::config_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
    format!("{}/{}.json", config_dir, crate::CONFIG_NAME)
}
