//! DOM-backed [`MenuView`] and page lookups.
//!
//! Every mutation is find-or-create: the count line and the placeholder are
//! looked up by id before anything is inserted, so rendering the same state
//! twice leaves exactly one node of each.

use crate::domain::error::{BlissError, Result};
use crate::domain::MenuItem;
use crate::ui::{InputFocus, MenuView, NoResults, TransitionPlan};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

pub const ITEM_SELECTOR: &str = ".menu-item";
pub const CONTROL_SELECTOR: &str = ".filter-btn";
pub const CATEGORY_ATTR: &str = "data-category";
pub const SEARCH_INPUT_ID: &str = "menu-search";
pub const GRID_ID: &str = "menu-grid";
pub const COUNT_ID: &str = "results-count";
pub const COUNT_PARENT_SELECTOR: &str = ".menu-controls .container";
pub const PLACEHOLDER_ID: &str = "no-results-message";

const ACTIVE_CLASS: &str = "active";

/// Collects every element matching `selector` that is an [`HtmlElement`].
///
/// # Errors
///
/// Returns an error if `selector` is not a valid CSS selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn child_text(element: &Element, selector: &str) -> String {
    element
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|child| child.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Reads the item store from the rendered `.menu-item` elements.
///
/// Missing children or attributes read as empty strings; such an item only
/// matches the empty query and never a named category.
#[must_use]
pub fn read_menu_items(elements: &[HtmlElement]) -> Vec<MenuItem> {
    elements
        .iter()
        .map(|element| {
            MenuItem::new(
                child_text(element, "h3"),
                child_text(element, "p"),
                element.get_attribute(CATEGORY_ATTR).unwrap_or_default(),
            )
        })
        .collect()
}

/// Runs `f` once after `delay`.
///
/// The callback frees itself after running.
///
/// # Errors
///
/// Returns an error if the browser rejects the timeout.
pub fn defer(window: &Window, delay: Duration, f: impl FnOnce() + 'static) -> Result<()> {
    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        millis,
    )?;
    Ok(())
}

/// Live page implementation of [`MenuView`].
#[derive(Debug)]
pub struct DomMenuView {
    window: Window,
    document: Document,
    items: Vec<HtmlElement>,
    controls: Vec<HtmlElement>,
    /// Per-item transition generation; a deferred step only runs while its
    /// generation is still current.
    generations: Rc<[Cell<u64>]>,
    on_clear: Closure<dyn FnMut()>,
}

impl DomMenuView {
    /// Creates a view over the given items and filter controls.
    ///
    /// `on_clear` is attached to the placeholder's "Clear Search" button.
    #[must_use]
    pub fn new(
        window: Window,
        document: Document,
        items: Vec<HtmlElement>,
        controls: Vec<HtmlElement>,
        on_clear: Closure<dyn FnMut()>,
    ) -> Self {
        let generations = items.iter().map(|_| Cell::new(0)).collect();
        Self {
            window,
            document,
            items,
            controls,
            generations,
            on_clear,
        }
    }

    fn next_generation(&self, index: usize) -> u64 {
        let cell = &self.generations[index];
        cell.set(cell.get().wrapping_add(1));
        cell.get()
    }

    fn count_line(&self) -> Result<Option<Element>> {
        if let Some(existing) = self.document.get_element_by_id(COUNT_ID) {
            return Ok(Some(existing));
        }
        let Some(parent) = self.document.query_selector(COUNT_PARENT_SELECTOR)? else {
            tracing::debug!(selector = COUNT_PARENT_SELECTOR, "no container for the count line");
            return Ok(None);
        };
        let line = self.document.create_element("div")?;
        line.set_id(COUNT_ID);
        line.set_class_name("results-count");
        parent.append_child(&line)?;
        Ok(Some(line))
    }

    fn placeholder(&self) -> Result<Option<Element>> {
        if let Some(existing) = self.document.get_element_by_id(PLACEHOLDER_ID) {
            return Ok(Some(existing));
        }
        let Some(grid) = self.document.get_element_by_id(GRID_ID) else {
            tracing::debug!(id = GRID_ID, "no grid for the placeholder");
            return Ok(None);
        };
        let placeholder = self.document.create_element("div")?;
        placeholder.set_id(PLACEHOLDER_ID);
        placeholder.set_class_name("no-results");
        grid.append_child(&placeholder)?;
        Ok(Some(placeholder))
    }

    fn search_input(&self) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(SEARCH_INPUT_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    }
}

impl MenuView for DomMenuView {
    fn apply_transitions(&mut self, plan: &TransitionPlan) -> Result<()> {
        for step in &plan.steps {
            let Some(item) = self.items.get(step.index) else {
                continue;
            };
            let generation = self.next_generation(step.index);
            let generations = Rc::clone(&self.generations);
            let index = step.index;
            let style = item.style();

            if step.visible {
                style.set_property("display", "block")?;
                let item = item.clone();
                defer(&self.window, step.delay, move || {
                    if generations[index].get() != generation {
                        return;
                    }
                    let style = item.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                })?;
            } else {
                style.set_property("opacity", "0")?;
                style.set_property("transform", "translateY(20px)")?;
                let item = item.clone();
                defer(&self.window, step.delay, move || {
                    if generations[index].get() != generation {
                        return;
                    }
                    let _ = item.style().set_property("display", "none");
                })?;
            }
        }
        Ok(())
    }

    fn set_active_control(&mut self, category: &str) -> Result<()> {
        for control in &self.controls {
            let active = control.get_attribute(CATEGORY_ATTR).as_deref() == Some(category);
            control.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
        }
        Ok(())
    }

    fn set_count_line(&mut self, line: &str) -> Result<()> {
        if let Some(element) = self.count_line()? {
            element.set_text_content(Some(line));
        }
        Ok(())
    }

    fn set_no_results(&mut self, placeholder: Option<&NoResults>) -> Result<()> {
        let Some(content) = placeholder else {
            if let Some(existing) = self.document.get_element_by_id(PLACEHOLDER_ID) {
                existing.remove();
            }
            return Ok(());
        };
        let Some(element) = self.placeholder()? else {
            return Ok(());
        };

        // rebuilt from text nodes so the query is never parsed as markup
        element.set_inner_html("");
        let title = self.document.create_element("h3")?;
        title.set_text_content(Some(&content.title));
        let message = self.document.create_element("p")?;
        message.set_text_content(Some(&content.message));
        let button = self.document.create_element("button")?;
        button.set_attribute("type", "button")?;
        button.set_class_name("btn btn-primary");
        button.set_text_content(Some("Clear Search"));
        button.add_event_listener_with_callback("click", self.on_clear.as_ref().unchecked_ref())?;

        element.append_child(&title)?;
        element.append_child(&message)?;
        element.append_child(&button)?;
        Ok(())
    }

    fn reset_search_input(&mut self, focus: InputFocus) -> Result<()> {
        let Some(input) = self.search_input() else {
            return Ok(());
        };
        input.set_value("");
        match focus {
            InputFocus::Focus => input.focus()?,
            InputFocus::Blur => input.blur()?,
        }
        Ok(())
    }

    fn location(&self) -> Result<Url> {
        let href = self.window.location().href()?;
        Ok(Url::parse(&href)?)
    }

    fn replace_location(&mut self, url: &Url) -> Result<()> {
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
            .map_err(BlissError::from)
    }
}
