//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for kiosk timings
///
/// Every field is optional; missing values fall back to the defaults the
/// accessors provide.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KioskConfig {
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the success notice stays visible, in milliseconds
    pub notice_timeout_ms: Option<u64>,
    /// How long a status announcement stays visible, in milliseconds
    pub announcement_timeout_ms: Option<u64>,
    /// Testimonial auto-advance interval in milliseconds
    pub carousel_interval_ms: Option<u64>,
}

impl KioskConfig {
    const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
    const DEFAULT_NOTICE_TIMEOUT_MS: u64 = 5000;
    const DEFAULT_ANNOUNCEMENT_TIMEOUT_MS: u64 = 1000;
    const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5000;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "fitlife", "fitlife-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: KioskConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Delay before a submission resolves
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(Self::DEFAULT_SUBMIT_DELAY_MS))
    }

    /// How long the success notice stays up before auto-dismissing
    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(
            self.notice_timeout_ms
                .unwrap_or(Self::DEFAULT_NOTICE_TIMEOUT_MS),
        )
    }

    /// How long a status announcement stays up
    pub fn announcement_timeout(&self) -> Duration {
        Duration::from_millis(
            self.announcement_timeout_ms
                .unwrap_or(Self::DEFAULT_ANNOUNCEMENT_TIMEOUT_MS),
        )
    }

    /// Interval between automatic carousel advances
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(
            self.carousel_interval_ms
                .unwrap_or(Self::DEFAULT_CAROUSEL_INTERVAL_MS),
        )
    }
}
