// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chooses where favorites and prefs are kept for this run.

use std::path::Path;

use holocron_app_core::config::{ConfigError, ConfigStore, MemoryStore};
use holocron_config_fs::FsConfigStore;

/// Durable (filesystem) or throwaway (memory) storage.
pub enum Storage {
    /// JSON files in a directory.
    Fs(FsConfigStore),
    /// Nothing outlives the process.
    Memory(MemoryStore),
}

impl Storage {
    /// Memory when `ephemeral`, else `dir` or the platform config directory.
    pub fn open(dir: Option<&Path>, ephemeral: bool) -> Result<Self, ConfigError> {
        if ephemeral {
            return Ok(Self::Memory(MemoryStore::new()));
        }
        let fs = match dir {
            Some(dir) => FsConfigStore::at(dir)?,
            None => FsConfigStore::new()?,
        };
        Ok(Self::Fs(fs))
    }

    /// Human-readable location.
    pub fn describe(&self) -> String {
        match self {
            Self::Fs(fs) => fs.base().display().to_string(),
            Self::Memory(_) => "<memory>".to_owned(),
        }
    }
}

impl ConfigStore for Storage {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match self {
            Self::Fs(fs) => fs.load_raw(key),
            Self::Memory(mem) => mem.load_raw(key),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        match self {
            Self::Fs(fs) => fs.save_raw(key, data),
            Self::Memory(mem) => mem.save_raw(key, data),
        }
    }
}
