//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a roster session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat file used by save/load and the startup load
    pub data_file: PathBuf,

    /// Load `data_file` when a session starts
    pub autoload: bool,

    // -------------------------------------------------------------------------
    // Roster Limits
    // -------------------------------------------------------------------------
    /// Maximum number of students held at once
    pub capacity: usize,

    /// Maximum name length in bytes
    pub max_name_len: usize,
}

impl Config {
    pub const DEFAULT_DATA_FILE: &'static str = "students_save.csv";
    pub const DEFAULT_CAPACITY: usize = 100;
    pub const DEFAULT_MAX_NAME_LEN: usize = 49;

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject limits that would make every add fail
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(RosterError::Config("capacity must be at least 1".to_string()));
        }
        if self.max_name_len == 0 {
            return Err(RosterError::Config(
                "max_name_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            autoload: true,
            capacity: Self::DEFAULT_CAPACITY,
            max_name_len: Self::DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the persistence file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable the startup load
    pub fn autoload(mut self, enabled: bool) -> Self {
        self.config.autoload = enabled;
        self
    }

    /// Set the maximum number of students
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the maximum name length (in bytes)
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.config.max_name_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
