use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::config::{RepairTrackerConfig, CONFIG_FILE};

pub struct InitCommand {
    pub path: PathBuf,
    pub force: bool,
}

impl InitCommand {
    pub fn new(path: Option<PathBuf>, force: bool) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE)),
            force,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        if self.path.exists() && !self.force {
            return Err(anyhow!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            ));
        }

        RepairTrackerConfig::default().save_to_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "Configuration written");

        println!("✅ Wrote {}", self.path.display());
        println!("   💡 Edit database.url to point at your shop database");
        Ok(())
    }
}
