//! Browser entry point.
//!
//! Thin integration layer between the library and the page, the counterpart of
//! a plugin shim: it reads configuration, starts tracing, detects the page
//! and mounts the matching behavior.
//!
//! # Start-up
//!
//! 1. Install the panic hook
//! 2. Load [`Config`] from `#bliss-config` or the body's `data-*` attributes
//! 3. Initialize tracing
//! 4. Mount the menu, login or contact behavior according to [`Page`]
//!
//! Failures are logged and leave the server-rendered page as it is.
//!
//! # Modules
//!
//! - [`dom`]: DOM-backed [`crate::ui::MenuView`]
//! - [`scheduler`]: `setTimeout`-backed [`crate::infrastructure::Scheduler`]
//! - [`bindings`]: Menu event listeners and the controller slot
//! - [`forms`]: Login and contact form wiring

pub mod bindings;
pub mod dom;
pub mod forms;
pub mod scheduler;

use crate::app::Event;
use crate::domain::error::{BlissError, Result};
use crate::domain::Page;
use crate::observability::init_tracing;
use crate::Config;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

const CONFIG_SCRIPT_ID: &str = "bliss-config";

/// Reads configuration from the inline TOML block, else from the body's
/// `data-*` attributes, else defaults.
fn load_config(document: &Document) -> Config {
    if let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) {
        let source = script.text_content().unwrap_or_default();
        match Config::from_toml(&source) {
            Ok(config) => return config,
            // tracing is not up yet
            Err(e) => web_sys::console::warn_1(&format!("bliss-config ignored: {e}").into()),
        }
    }

    let Some(body) = document.body() else {
        return Config::default();
    };
    let dataset = body.dataset();
    let attributes: BTreeMap<String, String> = Config::DATASET_KEYS
        .iter()
        .filter_map(|key| dataset.get(key).map(|value| ((*key).to_string(), value)))
        .collect();
    Config::from_dataset(&attributes)
}

fn page_handles() -> Result<(Window, Document)> {
    let window = web_sys::window().ok_or_else(|| BlissError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| BlissError::Dom("no document".to_string()))?;
    Ok((window, document))
}

fn mount(window: &Window, document: &Document, config: &Config) -> Result<()> {
    let path = window.location().pathname()?;
    let page = Page::from_path(&path);
    let _span = tracing::debug_span!("mount", ?page, path = %path).entered();

    match page {
        Page::Menu => bindings::mount_menu(window, document, config),
        Page::Login => forms::mount_login(document),
        Page::Contact => forms::mount_contact(document),
        Page::Other => {
            tracing::debug!("no page-specific behavior");
            Ok(())
        }
    }
}

/// Module start function, run once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (window, document) = match page_handles() {
        Ok(handles) => handles,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return;
        }
    };

    let config = load_config(&document);
    init_tracing(&config);
    tracing::debug!(?config, "behavior layer starting");

    if let Err(e) = mount(&window, &document, &config) {
        tracing::warn!(error = %e, "page behavior not mounted");
    }
}

/// Clears the menu search, focuses the search box and shows every item.
///
/// Exported for markup that calls `clearSearch()` directly.
#[wasm_bindgen(js_name = clearSearch)]
pub fn clear_search() {
    bindings::dispatch(Event::ClearSearch);
}
