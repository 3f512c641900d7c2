//! Reading speed preference
//!
//! Persisted separately from saved texts in LocalStorage.

use crate::consts::WPM_STORAGE_KEY;
use crate::error::Result;
use crate::metrics::resolve_wpm;
use crate::persistence::KeyValueStore;

/// User settings
///
/// The WPM value is kept exactly as typed; the default rate is applied
/// when reading it, never written back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    wpm: Option<String>,
}

impl Settings {
    /// Settings holding the raw WPM input value
    pub fn with_wpm(raw: impl Into<String>) -> Self {
        Self {
            wpm: Some(raw.into()),
        }
    }

    /// Raw WPM string, if one was entered
    pub fn raw_wpm(&self) -> Option<&str> {
        self.wpm.as_deref()
    }

    /// Effective reading speed
    pub fn wpm(&self) -> i64 {
        resolve_wpm(self.raw_wpm())
    }

    /// Replace the raw WPM value
    pub fn set_wpm(&mut self, raw: impl Into<String>) {
        self.wpm = Some(raw.into());
    }

    /// Load settings from the store
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        let wpm = store.get_item(WPM_STORAGE_KEY)?;
        match &wpm {
            Some(raw) => log::info!("Loaded WPM setting: {}", raw),
            None => log::info!("Using default WPM"),
        }
        Ok(Self { wpm })
    }

    /// Save settings to the store; an unset WPM writes nothing
    pub fn save(&self, store: &impl KeyValueStore) -> Result<()> {
        if let Some(raw) = &self.wpm {
            store.set_item(WPM_STORAGE_KEY, raw)?;
            log::info!("WPM setting saved: {}", raw);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_WPM;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_default_is_not_stored() {
        let store = MemoryStore::new();
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings.wpm(), DEFAULT_WPM);

        settings.save(&store).unwrap();
        assert!(store.get_item(WPM_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_wpm_round_trips_as_plain_string() {
        let store = MemoryStore::new();
        Settings::with_wpm("250").save(&store).unwrap();
        assert_eq!(
            store.get_item(WPM_STORAGE_KEY).unwrap().as_deref(),
            Some("250")
        );

        let loaded = Settings::load(&store).unwrap();
        assert_eq!(loaded.wpm(), 250);
        assert_eq!(loaded.raw_wpm(), Some("250"));
    }

    #[test]
    fn test_unusable_value_falls_back_at_read_time() {
        let mut settings = Settings::default();
        settings.set_wpm("");
        assert_eq!(settings.wpm(), DEFAULT_WPM);
        assert_eq!(settings.raw_wpm(), Some(""));
    }
}
