//! Saved text snippets
//!
//! Persisted to LocalStorage as a JSON array, oldest first.

use serde::{Deserialize, Serialize};

use crate::consts::TEXTS_STORAGE_KEY;
use crate::error::Result;
use crate::persistence::KeyValueStore;

/// A single saved snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedText {
    /// Textarea contents at save time
    pub text: String,
    /// Unix timestamp (ms) when saved
    pub date: i64,
}

/// Append-only list of saved snippets in save order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SavedTexts {
    entries: Vec<SavedText>,
}

impl SavedTexts {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a snippet saved at `date`
    pub fn push(&mut self, text: impl Into<String>, date: i64) -> &SavedText {
        self.entries.push(SavedText {
            text: text.into(),
            date,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snippet by storage index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&SavedText> {
        self.entries.get(index)
    }

    /// Snippets newest first, paired with their storage index
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &SavedText)> {
        self.entries.iter().enumerate().rev()
    }

    /// Load snippets from the store; a missing key is an empty list
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        match store.get_item(TEXTS_STORAGE_KEY)? {
            Some(json) => {
                let texts: SavedTexts = serde_json::from_str(&json)?;
                log::info!("Loaded {} saved texts", texts.len());
                Ok(texts)
            }
            None => {
                log::info!("No saved texts found, starting fresh");
                Ok(Self::new())
            }
        }
    }

    /// Write all snippets back to the store
    pub fn save(&self, store: &impl KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(self)?;
        store.set_item(TEXTS_STORAGE_KEY, &json)?;
        log::info!("Saved texts stored ({} entries)", self.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordCounterError;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        let texts = SavedTexts::load(&store).unwrap();
        assert!(texts.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let store = MemoryStore::new();
        let mut texts = SavedTexts::new();
        texts.push("first", 1_000);
        texts.push("second", 2_000);
        texts.save(&store).unwrap();

        let reloaded = SavedTexts::load(&store).unwrap();
        assert_eq!(reloaded, texts);
        assert_eq!(reloaded.get(1).map(|t| t.text.as_str()), Some("second"));
    }

    #[test]
    fn test_json_layout_is_bare_array() {
        let store = MemoryStore::new();
        let mut texts = SavedTexts::new();
        texts.push("hi", 42);
        texts.save(&store).unwrap();

        let json = store.get_item(TEXTS_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(json, r#"[{"text":"hi","date":42}]"#);
    }

    #[test]
    fn test_reads_browser_written_records() {
        let store = MemoryStore::new();
        store
            .set_item(
                TEXTS_STORAGE_KEY,
                r#"[{"date":1700000000000,"text":"from js"}]"#,
            )
            .unwrap();
        let texts = SavedTexts::load(&store).unwrap();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts.get(0).unwrap().date, 1_700_000_000_000);
    }

    #[test]
    fn test_newest_first_keeps_indices() {
        let mut texts = SavedTexts::new();
        texts.push("a", 1);
        texts.push("b", 2);
        texts.push("c", 3);
        let order: Vec<(usize, &str)> = texts
            .newest_first()
            .map(|(i, t)| (i, t.text.as_str()))
            .collect();
        assert_eq!(order, vec![(2, "c"), (1, "b"), (0, "a")]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let store = MemoryStore::new();
        store.set_item(TEXTS_STORAGE_KEY, "{not json").unwrap();
        let err = SavedTexts::load(&store).unwrap_err();
        assert!(matches!(err, WordCounterError::Serialization(_)));
    }
}
