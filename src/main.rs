//! Word Counter entry point
//!
//! In the browser this wires DOM events to the controller. Natively it
//! reports statistics for text piped on stdin.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use word_counter::consts::*;
    use word_counter::persistence::LocalStorage;
    use word_counter::platform::DomView;
    use word_counter::{WordCounter, WordCounterError};

    type App = Rc<RefCell<WordCounter<LocalStorage, DomView>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Word Counter starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let store = match LocalStorage::open() {
            Ok(store) => store,
            Err(e) => {
                log::error!("Cannot open LocalStorage: {}", e);
                return;
            }
        };

        let view = match DomView::attach(document.clone()) {
            Ok(view) => view,
            Err(e) => {
                log::error!("Cannot attach to page: {:?}", e);
                return;
            }
        };

        let app: App = Rc::new(RefCell::new(WordCounter::new(store, view)));
        if let Err(e) = app.borrow_mut().on_load() {
            log::error!("Failed to load saved state: {}", e);
        }

        setup_text_input(&document, app.clone());
        setup_wpm_input(&document, app.clone());
        setup_save_button(&document, app.clone());
        setup_saved_text_clicks(&document, app);

        log::info!("Word Counter running!");
    }

    fn setup_text_input(document: &web_sys::Document, app: App) {
        if let Some(el) = document.get_element_by_id(TEXT_INPUT_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().on_input();
            });
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_wpm_input(document: &web_sys::Document, app: App) {
        if let Some(el) = document.get_element_by_id(WPM_INPUT_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                match app.borrow_mut().on_wpm_change() {
                    Ok(reading_time) => log::debug!("Reading time now {}", reading_time),
                    Err(e) => log::error!("Failed to store WPM: {}", e),
                }
            });
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_save_button(document: &web_sys::Document, app: App) {
        if let Some(btn) = document.get_element_by_id(SAVE_BUTTON_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let now = js_sys::Date::now() as i64;
                match app.borrow_mut().on_save(now) {
                    Ok(count) => log::info!("Text saved ({} total)", count),
                    Err(WordCounterError::EmptyText) => log::info!("Ignored empty save"),
                    Err(e) => log::error!("Save failed: {}", e),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Save button #{} not found", SAVE_BUTTON_ID);
        }
    }

    /// One delegated listener for every rendered saved text
    fn setup_saved_text_clicks(document: &web_sys::Document, app: App) {
        if let Some(container) = document.get_element_by_id(SAVED_TEXTS_ID) {
            let selector = format!(".{}", SAVED_TEXT_CLASS);
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                let index = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest(&selector).ok().flatten())
                    .and_then(|el| el.get_attribute("data-index"))
                    .and_then(|idx| idx.parse::<usize>().ok());

                if let Some(index) = index {
                    match app.borrow_mut().on_select(index) {
                        Ok(true) => log::info!("Loaded saved text {}", index),
                        Ok(false) => {}
                        Err(e) => log::error!("Failed to load saved text: {}", e),
                    }
                }
            });
            let _ = container
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str = "Usage: word-counter [--wpm N] < FILE

Reports word, line and character counts and the estimated reading
time for text read from stdin.

Options:
  --wpm N     Reading speed in words per minute (default 200)
  -h, --help  Show this message";

/// Native command-line options
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    wpm: Option<String>,
    help: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--wpm" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--wpm requires a value".to_string())?;
                options.wpm = Some(value);
            }
            other => match other.strip_prefix("--wpm=") {
                Some(value) => options.wpm = Some(value.to_string()),
                None => return Err(format!("unknown argument: {}", other)),
            },
        }
    }
    Ok(options)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::Read;
    use word_counter::TextMetrics;
    use word_counter::metrics::resolve_wpm;

    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if options.help {
        println!("{}", USAGE);
        return;
    }

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        log::error!("Failed to read stdin: {}", e);
        std::process::exit(1);
    }

    let wpm = resolve_wpm(options.wpm.as_deref());
    log::debug!("Measuring {} bytes at {} wpm", text.len(), wpm);

    let metrics = TextMetrics::measure(&text, wpm);
    println!("words: {}", metrics.words);
    println!("lines: {}", metrics.lines);
    println!("characters: {}", metrics.characters);
    println!("reading time: {}", metrics.reading_time);
}
