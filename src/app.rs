//! Event handlers
//!
//! `WordCounter` owns the store and the view and reacts to the page
//! events (load, typing, WPM change, save click, saved-text click). Each
//! handler runs to completion synchronously; storage is re-read on every
//! call so the page always reflects what is persisted.

use crate::consts::{EMPTY_TEXT_MESSAGE, SAVED_MESSAGE};
use crate::error::{Result, WordCounterError};
use crate::metrics::{TextMetrics, calculate_reading_time, count_words, resolve_wpm};
use crate::persistence::KeyValueStore;
use crate::saved_texts::SavedTexts;
use crate::settings::Settings;
use crate::view::{Metric, SavedTextEntry, View};

/// Word counter page controller
pub struct WordCounter<S: KeyValueStore, V: View> {
    store: S,
    view: V,
}

impl<S: KeyValueStore, V: View> WordCounter<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self { store, view }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Page load: show saved texts, restore WPM, measure any restored input
    pub fn on_load(&mut self) -> Result<()> {
        let texts = SavedTexts::load(&self.store)?;
        self.render_saved_texts(&texts);

        let settings = Settings::load(&self.store)?;
        if let Some(raw) = settings.raw_wpm() {
            self.view.write_wpm(raw);
        }

        self.on_input();
        Ok(())
    }

    /// Textarea changed: recompute every metric
    pub fn on_input(&mut self) -> TextMetrics {
        let text = self.view.read_input();
        let metrics = TextMetrics::measure(&text, self.current_wpm());

        self.view
            .render_metric(Metric::Words, &metrics.words.to_string());
        self.view
            .render_metric(Metric::Lines, &metrics.lines.to_string());
        self.view
            .render_metric(Metric::Characters, &metrics.characters.to_string());
        self.view
            .render_metric(Metric::ReadingTime, &metrics.reading_time);

        metrics
    }

    /// WPM input changed: persist it and refresh the reading time only
    pub fn on_wpm_change(&mut self) -> Result<String> {
        let raw = self.view.read_wpm();
        Settings::with_wpm(raw.as_str()).save(&self.store)?;

        let words = count_words(&self.view.read_input());
        let reading_time = calculate_reading_time(words, resolve_wpm(Some(&raw)));
        self.view.render_metric(Metric::ReadingTime, &reading_time);
        Ok(reading_time)
    }

    /// Save clicked: append the textarea contents as a new record
    ///
    /// Empty input is rejected with a notification and nothing is stored.
    /// Returns the number of saved texts after the save.
    pub fn on_save(&mut self, now_ms: i64) -> Result<usize> {
        let text = self.view.read_input();
        if text.is_empty() {
            self.view.notify(EMPTY_TEXT_MESSAGE);
            return Err(WordCounterError::EmptyText);
        }

        let mut texts = SavedTexts::load(&self.store)?;
        texts.push(text, now_ms);
        texts.save(&self.store)?;
        self.view.notify(SAVED_MESSAGE);

        self.render_saved_texts(&texts);
        Ok(texts.len())
    }

    /// Saved text clicked: load it into the textarea and re-measure
    ///
    /// Returns `false` when `index` is not a stored record.
    pub fn on_select(&mut self, index: usize) -> Result<bool> {
        let texts = SavedTexts::load(&self.store)?;
        let Some(record) = texts.get(index) else {
            log::warn!("No saved text at index {}", index);
            return Ok(false);
        };

        self.view.write_input(&record.text);
        self.on_input();
        Ok(true)
    }

    fn current_wpm(&self) -> i64 {
        resolve_wpm(Some(&self.view.read_wpm()))
    }

    fn render_saved_texts(&mut self, texts: &SavedTexts) {
        let entries: Vec<SavedTextEntry> = texts
            .newest_first()
            .map(|(index, record)| SavedTextEntry::from_record(index, record))
            .collect();
        self.view.render_saved_texts(&entries);
        self.view
            .render_metric(Metric::SavedCount, &texts.len().to_string());
    }
}
