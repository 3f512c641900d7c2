//! Presentation port
//!
//! The controller talks to the page only through [`View`], so the same
//! handlers drive the DOM in the browser and a recording fake in tests.

use crate::metrics::count_words;
use crate::saved_texts::SavedText;

/// A displayed statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Words,
    Lines,
    Characters,
    ReadingTime,
    /// Number of saved texts
    SavedCount,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Words => "Words",
            Metric::Lines => "Lines",
            Metric::Characters => "Characters",
            Metric::ReadingTime => "Reading time",
            Metric::SavedCount => "Saved texts",
        }
    }
}

/// One saved text as shown in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedTextEntry {
    /// Position in storage, used to load the text back on click
    pub index: usize,
    /// "{date} ({word count})"
    pub heading: String,
    /// Text split on newlines, shown with line breaks
    pub lines: Vec<String>,
}

impl SavedTextEntry {
    pub fn from_record(index: usize, record: &SavedText) -> Self {
        Self {
            index,
            heading: format!(
                "{} ({})",
                format_date(record.date),
                count_words(&record.text)
            ),
            lines: record.text.split('\n').map(str::to_string).collect(),
        }
    }
}

/// Capabilities the page offers the controller
pub trait View {
    /// Current textarea contents
    fn read_input(&self) -> String;
    /// Replace the textarea contents
    fn write_input(&mut self, text: &str);
    /// Current WPM input value
    fn read_wpm(&self) -> String;
    /// Replace the WPM input value
    fn write_wpm(&mut self, wpm: &str);
    /// Show `value` for `metric`
    fn render_metric(&mut self, metric: Metric, value: &str);
    /// Replace the saved-text list with `entries`, in display order
    fn render_saved_texts(&mut self, entries: &[SavedTextEntry]);
    /// Blocking user notification
    fn notify(&mut self, message: &str);
}

/// Format a save timestamp in the user's locale
#[cfg(target_arch = "wasm32")]
pub fn format_date(timestamp: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

/// Format a save timestamp in local time
#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(timestamp: i64) -> String {
    use chrono::{Local, TimeZone};

    match Local.timestamp_millis_opt(timestamp).single() {
        Some(date) => date.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "N/A".to_string(),
    }
}
