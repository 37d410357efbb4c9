use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Preferences {
    dark_mode: bool,
}

/// Stores the one preference the page remembers: dark mode
#[derive(Debug, Clone)]
pub struct PersistenceManager {
    config_dir: PathBuf,
}

impl PersistenceManager {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "technova")
            .context("Failed to determine config directory")?;

        Self::with_dir(project_dirs.config_dir())
    }

    /// Use an explicit directory instead of the platform config dir
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(PersistenceManager { config_dir })
    }

    /// Saved dark mode flag, or `None` if nothing was ever saved
    pub fn load_dark_mode(&self) -> Result<Option<bool>> {
        let path = self.config_dir.join(PREFERENCES_FILE);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).context("Failed to read preferences file")?;

        match serde_json::from_str::<Preferences>(&content) {
            Ok(prefs) => Ok(Some(prefs.dark_mode)),
            Err(e) => {
                tracing::warn!("Failed to parse preferences file: {}. Ignoring it.", e);
                Ok(None)
            }
        }
    }

    pub fn save_dark_mode(&self, dark_mode: bool) -> Result<()> {
        let path = self.config_dir.join(PREFERENCES_FILE);
        let content = serde_json::to_string_pretty(&Preferences { dark_mode })
            .context("Failed to serialize preferences")?;

        fs::write(&path, content).context("Failed to write preferences file")?;
        tracing::debug!("Saved dark mode preference: {}", dark_mode);

        Ok(())
    }
}
