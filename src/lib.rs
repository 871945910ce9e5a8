//! Bliss Catering: client-side behavior for the catering website.
//!
//! Compiled to WebAssembly and loaded by every page, the crate provides:
//! - Category filtering of the menu grid with staggered transitions
//! - Debounced free-text search over item names and descriptions
//! - A result count line and a "no results" placeholder
//! - `category` query-parameter sync with history replace
//! - Login and contact form validation

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Browser Shim (web/)                                │  ← Entry point
//! │  - wasm start, listeners, DOM view, timers          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter/search
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Forms         │   │ Infrastructure│
//! │ (ui/)         │   │ (forms/)      │   │ - Debounce    │
//! │ - Presenter   │   │ - Validators  │   │ - URL params  │
//! │ - Transitions │   │ - Form rules  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Menu items, category filter, visible set         │
//! │  - Page detection, error types                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below `web/` is plain Rust and is tested natively; `web/` is
//! only compiled for `wasm32`.
//!
//! # Modules
//!
//! - [`app`]: Menu state machine with event/action model
//! - [`domain`]: Core domain types (items, filters, pages, errors)
//! - [`forms`]: Form validators and rules
//! - [`infrastructure`]: Timers, debouncing and URL handling
//! - [`ui`]: View models, transition plans and the [`ui::MenuView`] seam
//! - [`observability`]: Console tracing
//! - `web`: Browser bindings (wasm32 only)
//!
//! # Configuration
//!
//! Timings and the trace level can be overridden per page, either with an
//! inline TOML block:
//!
//! ```html
//! <script type="application/toml" id="bliss-config">
//!   search_debounce_ms = 250
//!   trace_level = "debug"
//! </script>
//! ```
//!
//! or with `data-*` attributes on `<body>`:
//!
//! ```html
//! <body data-search-debounce-ms="250" data-trace-level="debug">
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bliss_catering::app::{handle_event, Event, MenuState};
//! use bliss_catering::MenuItem;
//!
//! let mut state = MenuState::new(
//!     vec![
//!         MenuItem::new("Chicken Wrap", "Grilled chicken", "lunch"),
//!         MenuItem::new("Fruit Salad", "Seasonal fruit", "dessert"),
//!     ],
//!     ["all", "lunch", "dessert"],
//! );
//!
//! let _actions = handle_event(&mut state, &Event::CategorySelected("lunch".into()));
//! assert_eq!(state.visible.count(), 1);
//!
//! let _actions = handle_event(&mut state, &Event::SearchSettled("fruit".into()));
//! assert_eq!(state.visible.count(), 1);
//! assert!(state.visible.contains(1));
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure Handler, Effectful Controller
//!
//! `handle_event` recomputes visibility synchronously and returns actions;
//! only the controller touches the page or the clock. Tests drive the same
//! controller with a virtual clock and an in-memory page.
//!
//! ## Token Timers
//!
//! Timers report a `TimerId` instead of running a callback, so a superseded
//! debounce timer is recognized and dropped rather than raced.

pub mod app;
pub mod domain;
pub mod forms;
pub mod infrastructure;
pub mod observability;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{handle_event, Action, Event, MenuController, MenuState, Timing};
pub use domain::{BlissError, CategoryFilter, MenuItem, Page, Result, VisibleSet};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_FILTER_STAGGER_MS: u64 = 50;
const DEFAULT_SEARCH_STAGGER_MS: u64 = 30;
const DEFAULT_HIDE_DELAY_MS: u64 = 300;

/// Page configuration.
///
/// Every field is optional in both sources; missing or unparsable values fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search input quiet period. Default: 300
    pub search_debounce_ms: u64,

    /// Per-index fade-in delay after a filter. Default: 50
    pub filter_stagger_ms: u64,

    /// Per-index fade-in delay after a search. Default: 30
    pub search_stagger_ms: u64,

    /// Delay before hidden items leave the layout. Default: 300
    pub hide_delay_ms: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            filter_stagger_ms: DEFAULT_FILTER_STAGGER_MS,
            search_stagger_ms: DEFAULT_SEARCH_STAGGER_MS,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            trace_level: None,
        }
    }
}

impl Config {
    /// `dataset` keys read by [`Config::from_dataset`].
    pub const DATASET_KEYS: [&'static str; 5] = [
        "searchDebounceMs",
        "filterStaggerMs",
        "searchStaggerMs",
        "hideDelayMs",
        "traceLevel",
    ];

    /// Parses configuration from `data-*` attributes.
    ///
    /// Keys are the camel-cased `dataset` names, so `data-search-debounce-ms`
    /// arrives as `searchDebounceMs`.
    ///
    /// # Parsing Rules
    ///
    /// - `*Ms`: String → `u64` (falls back to the default on parse error)
    /// - `traceLevel`: String → `Option<String>` (blank is ignored)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bliss_catering::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("searchDebounceMs".to_string(), "150".to_string());
    /// map.insert("hideDelayMs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_dataset(&map);
    /// assert_eq!(config.search_debounce_ms, 150);
    /// assert_eq!(config.hide_delay_ms, 300);
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &BTreeMap<String, String>) -> Self {
        let millis = |key: &str, default: u64| {
            dataset
                .get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            search_debounce_ms: millis("searchDebounceMs", DEFAULT_SEARCH_DEBOUNCE_MS),
            filter_stagger_ms: millis("filterStaggerMs", DEFAULT_FILTER_STAGGER_MS),
            search_stagger_ms: millis("searchStaggerMs", DEFAULT_SEARCH_STAGGER_MS),
            hide_delay_ms: millis("hideDelayMs", DEFAULT_HIDE_DELAY_MS),
            trace_level: dataset
                .get("traceLevel")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BlissError::Config`] if the document is not valid TOML or a
    /// value has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bliss_catering::Config;
    ///
    /// let config = Config::from_toml("filter_stagger_ms = 0")?;
    /// assert_eq!(config.filter_stagger_ms, 0);
    /// assert_eq!(config.search_debounce_ms, 300);
    /// # Ok::<(), bliss_catering::BlissError>(())
    /// ```
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Durations used by the menu controller.
    #[must_use]
    pub const fn timing(&self) -> Timing {
        Timing {
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            filter_stagger: Duration::from_millis(self.filter_stagger_ms),
            search_stagger: Duration::from_millis(self.search_stagger_ms),
            hide_delay: Duration::from_millis(self.hide_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_controller_timing() {
        assert_eq!(Config::default().timing(), Timing::default());
    }

    #[test]
    fn dataset_overrides_and_fallbacks() {
        let map: BTreeMap<String, String> = [
            ("filterStaggerMs", " 20 "),
            ("searchStaggerMs", "-5"),
            ("traceLevel", "  "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_dataset(&map);
        assert_eq!(config.filter_stagger_ms, 20);
        assert_eq!(config.search_stagger_ms, DEFAULT_SEARCH_STAGGER_MS);
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn empty_dataset_is_default() {
        assert_eq!(Config::from_dataset(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn toml_fills_missing_keys() {
        let config = Config::from_toml(
            r#"
            search_debounce_ms = 120
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.search_debounce_ms, 120);
        assert_eq!(config.hide_delay_ms, DEFAULT_HIDE_DELAY_MS);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.timing().search_debounce, Duration::from_millis(120));
    }

    #[test]
    fn toml_type_errors_are_config_errors() {
        let err = Config::from_toml("hide_delay_ms = \"long\"").unwrap_err();
        assert!(matches!(err, BlissError::Config(_)));
    }

    #[test]
    fn blank_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }
}
