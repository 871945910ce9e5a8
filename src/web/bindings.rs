//! Event listeners for the menu page.
//!
//! ```text
//! click / input / keydown ──Closure──► dispatch(Event) ──► MENU controller
//! setTimeout ──────────────Closure──► timer_elapsed(TimerId) ─┘
//! ```
//!
//! The controller lives in a thread-local slot. Listeners borrow it for the
//! duration of one dispatch; nothing they call re-enters the slot.

use super::dom::{
    query_all, read_menu_items, DomMenuView, CATEGORY_ATTR, CONTROL_SELECTOR, ITEM_SELECTOR,
    SEARCH_INPUT_ID,
};
use super::scheduler::BrowserScheduler;
use crate::app::{Event, MenuController, MenuState};
use crate::domain::error::Result;
use crate::infrastructure::url::category_param;
use crate::Config;
use std::cell::RefCell;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, KeyboardEvent, Window};

type WebMenu = MenuController<BrowserScheduler, DomMenuView>;

thread_local! {
    static MENU: RefCell<Option<WebMenu>> = const { RefCell::new(None) };
}

/// Runs `f` against the mounted menu, logging instead of propagating failures.
fn with_menu(f: impl FnOnce(&mut WebMenu) -> Result<()>) {
    MENU.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            tracing::warn!("menu controller busy, event dropped");
            return;
        };
        match slot.as_mut() {
            Some(menu) => {
                if let Err(e) = f(menu) {
                    tracing::warn!(error = %e, "menu update failed");
                }
            }
            None => tracing::debug!("menu not mounted"),
        }
    });
}

/// Dispatches `event` to the mounted menu, if any.
pub fn dispatch(event: Event) {
    with_menu(|menu| menu.dispatch(&event));
}

/// Wires the filter controls and the search box and restores the category
/// from the URL.
///
/// A page without `.menu-item` elements is left untouched.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn mount_menu(window: &Window, document: &Document, config: &Config) -> Result<()> {
    let _span = tracing::debug_span!("mount_menu").entered();

    let elements = query_all(document, ITEM_SELECTOR)?;
    if elements.is_empty() {
        tracing::debug!("no menu items on page");
        return Ok(());
    }
    let controls = query_all(document, CONTROL_SELECTOR)?;
    let categories: Vec<String> = controls
        .iter()
        .filter_map(|control| control.get_attribute(CATEGORY_ATTR))
        .collect();

    let state = MenuState::new(read_menu_items(&elements), categories);
    let on_clear = Closure::<dyn FnMut()>::new(|| dispatch(Event::ClearSearch));
    let view = DomMenuView::new(
        window.clone(),
        document.clone(),
        elements,
        controls.clone(),
        on_clear,
    );
    let scheduler = BrowserScheduler::new(window.clone(), |id| {
        with_menu(|menu| menu.timer_elapsed(id));
    });
    let item_count = state.items.len();
    MENU.with(|slot| {
        *slot.borrow_mut() = Some(MenuController::new(state, scheduler, view, config.timing()));
    });

    for control in &controls {
        let Some(category) = control.get_attribute(CATEGORY_ATTR) else {
            continue;
        };
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            dispatch(Event::CategorySelected(category.clone()));
        });
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    match document
        .get_element_by_id(SEARCH_INPUT_ID)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    {
        Some(input) => bind_search_input(&input)?,
        None => tracing::debug!(id = SEARCH_INPUT_ID, "no search input on page"),
    }

    let url_category = window
        .location()
        .href()
        .ok()
        .and_then(|href| Url::parse(&href).ok())
        .and_then(|url| category_param(&url));
    dispatch(Event::PageLoaded { url_category });

    tracing::info!(items = item_count, controls = controls.len(), "menu mounted");
    Ok(())
}

fn bind_search_input(input: &HtmlInputElement) -> Result<()> {
    let target = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        dispatch(Event::SearchInput(target.value()));
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            dispatch(Event::SearchEscape);
        }
    });
    input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();
    Ok(())
}
