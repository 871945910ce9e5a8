//! Domain layer: menu model, page classification and errors.
//!
//! Nothing in here touches the browser; every type is plain data so the
//! engines built on top of it can be exercised natively.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`menu`]: Menu items, category selection and visible sets
//! - [`page`]: Page detection from the request path

pub mod error;
pub mod menu;
pub mod page;

pub use error::{BlissError, Result};
pub use menu::{CategoryFilter, MenuItem, VisibleSet, ALL_CATEGORIES};
pub use page::Page;
