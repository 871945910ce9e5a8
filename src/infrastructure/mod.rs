//! Infrastructure utilities shared by the application and browser layers.
//!
//! - [`timer`]: Scheduler abstraction and debouncing
//! - [`url`]: `category` query-parameter handling

pub mod timer;
pub mod url;

pub use timer::{Debouncer, Scheduler, TimerId};
