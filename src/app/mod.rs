//! Application layer for the menu page.
//!
//! Sits between the browser bindings (`web`) and the pure domain and
//! presentation types. It implements an event-driven loop:
//!
//! ```text
//! User Input → Event → handle_event → State Mutations → Actions → MenuView / Scheduler
//!                          ↑                                          ↓
//!                          └────────────── elapsed TimerId ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Category filter engine
//! - [`search`]: Search engine and query normalization
//! - [`state`]: Menu state container
//! - [`modes`]: Filter/search authority
//! - [`actions`]: Side effects produced by the handler
//! - [`handler`]: Event processing
//! - [`controller`]: Action execution against a scheduler and a view

pub mod actions;
pub mod controller;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;

pub use actions::Action;
pub use controller::{MenuController, Timing};
pub use filter::apply_filter;
pub use handler::{handle_event, Event};
pub use modes::Authority;
pub use search::{apply_search, SearchQuery};
pub use state::MenuState;
