//! Browser-console observability.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter (trace_level) → tracing-wasm layer → console
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` config option
//! (`data-trace-level` on `<body>` or `trace_level` in `#bliss-config`).
//! Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

pub mod init;

pub use init::init_tracing;
