//! DOM-backed view

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::consts::*;
use crate::view::{Metric, SavedTextEntry, View};

/// Page elements the word counter reads and writes
pub struct DomView {
    document: Document,
    text: HtmlTextAreaElement,
    wpm: Option<HtmlInputElement>,
    saved_texts: Option<Element>,
}

impl DomView {
    /// Look up the page elements; only the textarea is required
    pub fn attach(document: Document) -> Result<Self, JsValue> {
        let text = document
            .get_element_by_id(TEXT_INPUT_ID)
            .ok_or_else(|| JsValue::from_str("textarea #text not found"))?
            .dyn_into::<HtmlTextAreaElement>()?;

        let wpm = document
            .get_element_by_id(WPM_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if wpm.is_none() {
            log::warn!("WPM input #{} not found", WPM_INPUT_ID);
        }

        let saved_texts = document.get_element_by_id(SAVED_TEXTS_ID);
        if saved_texts.is_none() {
            log::warn!("Saved texts container #{} not found", SAVED_TEXTS_ID);
        }

        Ok(Self {
            document,
            text,
            wpm,
            saved_texts,
        })
    }

    fn metric_element(&self, metric: Metric) -> Option<Element> {
        let id = match metric {
            Metric::Words => WORD_COUNT_ID,
            Metric::Lines => LINE_COUNT_ID,
            Metric::Characters => CHARACTER_COUNT_ID,
            Metric::ReadingTime => READING_TIME_ID,
            Metric::SavedCount => {
                return self
                    .document
                    .query_selector(SAVED_TEXTS_COUNT_SELECTOR)
                    .ok()
                    .flatten();
            }
        };
        self.document.get_element_by_id(id)
    }

    /// `<div class="saved-text" data-index=".."><strong>heading:</strong><br><br>text</div>`
    fn build_entry(&self, entry: &SavedTextEntry) -> Result<Element, JsValue> {
        let div = self.document.create_element("div")?;
        div.class_list().add_1(SAVED_TEXT_CLASS)?;
        div.set_attribute("data-index", &entry.index.to_string())?;

        let heading = self.document.create_element("strong")?;
        heading.set_text_content(Some(&format!("{}:", entry.heading)));
        div.append_child(&heading)?;
        div.append_child(&self.document.create_element("br")?)?;
        div.append_child(&self.document.create_element("br")?)?;

        for (i, line) in entry.lines.iter().enumerate() {
            if i > 0 {
                div.append_child(&self.document.create_element("br")?)?;
            }
            div.append_child(&self.document.create_text_node(line))?;
        }

        Ok(div)
    }
}

impl View for DomView {
    fn read_input(&self) -> String {
        self.text.value()
    }

    fn write_input(&mut self, text: &str) {
        self.text.set_value(text);
    }

    fn read_wpm(&self) -> String {
        self.wpm.as_ref().map(|el| el.value()).unwrap_or_default()
    }

    fn write_wpm(&mut self, wpm: &str) {
        if let Some(el) = &self.wpm {
            el.set_value(wpm);
        }
    }

    fn render_metric(&mut self, metric: Metric, value: &str) {
        match self.metric_element(metric) {
            Some(el) => el.set_text_content(Some(value)),
            None => log::debug!("No element for {}", metric.as_str()),
        }
    }

    fn render_saved_texts(&mut self, entries: &[SavedTextEntry]) {
        let Some(container) = &self.saved_texts else {
            return;
        };

        // Rebuilt from scratch on every change
        container.set_inner_html("");
        for entry in entries {
            let appended = self
                .build_entry(entry)
                .and_then(|el| container.append_child(&el));
            if let Err(e) = appended {
                log::error!("Failed to render saved text {}: {:?}", entry.index, e);
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
