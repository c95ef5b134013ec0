//! JSON persistence for forest configs and generated forests.
//!
//! Files are pretty-printed so they can be inspected and diffed by hand.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::Result;
use crate::forest::config::ForestConfig;
use crate::forest::descriptor::Forest;

/// File extension for exported forests
pub const FOREST_FILE_EXTENSION: &str = "forest.json";

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

impl ForestConfig {
    /// Save to file
    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(self, path)
    }

    /// Load from file and validate
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = load_json(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl Forest {
    /// Save to file
    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(self, path)?;
        log::info!("Saved {} trees to {}", self.len(), path.display());
        Ok(())
    }

    /// Load from file
    pub fn load(path: &Path) -> Result<Self> {
        load_json(path)
    }
}
