//! Typed persistence for the passport record.

use crate::error::Result;
use crate::storage::{KeyValueStore, StorageError};

use super::Passport;

/// Storage key under which the passport record is kept. Matches the key the
/// original on-device store used, so saved passports carry over.
pub const PASSPORT_STORAGE_KEY: &str = "myhealth-passport";

/// Passport persistence over any [`KeyValueStore`].
///
/// Follows the load-on-start, save-on-update model: the record is read when
/// asked for and written back in full on every change. A stored value that
/// no longer parses is treated as "no passport yet" rather than an error.
pub struct PassportStore {
    store: Box<dyn KeyValueStore>,
}

impl PassportStore {
    /// Wraps a key-value store.
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the saved passport, if a readable one exists.
    #[must_use]
    pub fn load(&self) -> Option<Passport> {
        let raw = self.store.get(PASSPORT_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(passport) => Some(passport),
            Err(e) => {
                log::warn!("Failed to parse saved passport, starting fresh: {e}");
                None
            }
        }
    }

    /// Loads the saved passport or an empty one when nothing readable is
    /// stored.
    #[must_use]
    pub fn load_or_default(&self) -> Passport {
        self.load().unwrap_or_default()
    }

    /// Whether a readable passport has been saved.
    #[must_use]
    pub fn has_passport(&self) -> bool {
        self.load().is_some()
    }

    /// Saves the passport, replacing any previous record.
    pub fn save(&mut self, passport: &Passport) -> Result<()> {
        let json = serde_json::to_string(passport).map_err(StorageError::from)?;
        self.store.put(PASSPORT_STORAGE_KEY, &json)?;
        log::info!("Passport saved");
        Ok(())
    }

    /// Removes the saved passport.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(PASSPORT_STORAGE_KEY)?;
        Ok(())
    }
}
