//! Word Counter - text statistics with saved snippets
//!
//! Core modules:
//! - `metrics`: Word/line/character counts and reading-time estimate
//! - `persistence`: Key-value store abstraction (LocalStorage on web)
//! - `saved_texts`: Saved snippet records
//! - `settings`: Persisted reading speed
//! - `view`: Presentation port and view models
//! - `app`: Event handlers tying the above together
//! - `platform`: Browser bindings (wasm32 only)

pub mod app;
pub mod error;
pub mod metrics;
pub mod persistence;
pub mod platform;
pub mod saved_texts;
pub mod settings;
pub mod view;

pub use app::WordCounter;
pub use error::{Result, WordCounterError};
pub use metrics::TextMetrics;
pub use persistence::{KeyValueStore, MemoryStore};
pub use saved_texts::{SavedText, SavedTexts};
pub use settings::Settings;
pub use view::{Metric, SavedTextEntry, View};

/// Configuration constants
pub mod consts {
    /// LocalStorage key holding the JSON array of saved texts
    pub const TEXTS_STORAGE_KEY: &str = "word-counter__texts";
    /// LocalStorage key holding the WPM as a plain string
    pub const WPM_STORAGE_KEY: &str = "word-counter__wpm";

    /// Reading speed used when the WPM input is empty, zero or not a number
    pub const DEFAULT_WPM: i64 = 200;

    /// Alert shown when saving an empty textarea
    pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text before saving.";
    /// Alert shown after a successful save
    pub const SAVED_MESSAGE: &str = "Text saved to local storage!";

    /// DOM element ids
    pub const TEXT_INPUT_ID: &str = "text";
    pub const SAVE_BUTTON_ID: &str = "save";
    pub const WPM_INPUT_ID: &str = "wpm";
    pub const WORD_COUNT_ID: &str = "word-count";
    pub const LINE_COUNT_ID: &str = "line-count";
    pub const CHARACTER_COUNT_ID: &str = "character-count";
    pub const READING_TIME_ID: &str = "reading-time";
    pub const SAVED_TEXTS_ID: &str = "savedTexts";
    pub const SAVED_TEXTS_COUNT_SELECTOR: &str = ".saved-texts-count";
    /// Class applied to each rendered saved text
    pub const SAVED_TEXT_CLASS: &str = "saved-text";
}
