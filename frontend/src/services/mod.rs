//! Browser services.
//!
//! This module provides the pieces that touch browser APIs:
//!
//! # Services
//!
//! - [`http`] - upload transport (XHR for files, fetch for URL fields)
//! - [`page`] - page bootstrap: bootstrap widgets, flash messages, nav matching
//!
//! # JavaScript Bindings
//!
//! `page` binds to `src/js/widgets.js`, a thin wrapper around the
//! bootstrap bundle loaded by `index.html`.

pub mod http;
pub mod page;

pub use http::*;
pub use page::*;
