//! Table configuration: TOML-backed, created on first run, with CLI
//! overrides written back so they stick.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::Stakes;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of bot seats at the table.
    pub bots: usize,
    /// Stack handed to each new player.
    pub starting_stack: u32,
    pub stakes: Stakes,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            bots: 3,
            starting_stack: 100,
            stakes: Stakes::default(),
        }
    }
}

impl TableConfig {
    /// Load the config file, writing out the defaults first if it does
    /// not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = TableConfig::default();
            config.save(path)?;
            return Ok(config);
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: TableConfig = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).context("serializing config")?;
        std::fs::write(path, text)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Load the config and apply the CLI bot-count override, persisting
    /// the override so the next run keeps it.
    pub fn load_or_create_with_override(path: &Path, cli_bots: Option<usize>) -> Result<Self> {
        let mut config = Self::load_or_create(path)?;
        if let Some(bots) = cli_bots {
            if bots != config.bots {
                config.bots = bots;
                config
                    .save(path)
                    .with_context(|| format!("persisting bot override to {}", path.display()))?;
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bots < 2 {
            bail!("a table needs at least 2 players, got {}", self.bots);
        }
        if self.stakes.low_bet < 4 {
            bail!("low_bet must be at least 4 so the ante is nonzero");
        }
        if self.stakes.bring_in == 0 || self.stakes.bring_in > self.stakes.low_bet {
            bail!(
                "bring_in must be between 1 and low_bet, got {}",
                self.stakes.bring_in
            );
        }
        Ok(())
    }
}
