//! UI Components for the Drive Upload application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`NavBar`] - Navigation bar with active link highlighting
//! - [`Hero`] - Main title and call to action
//! - [`Footer`] - Page footer
//! - [`AlertStack`] - Flash message banners
//!
//! # Feature Components
//! - [`DirectUploadForm`], [`UrlUploadForm`], [`YoutubeUploadForm`] - the three upload paths
//! - [`UploadProgress`] - Per-form progress bar
//! - [`ResponseModal`] - Shared outcome dialog
//!
//! # Pages
//! - [`HomePage`], [`UploadsPage`]

mod alerts;
mod footer;
mod hero;
mod modal;
mod nav;
mod pages;
mod progress;
mod upload;

pub use alerts::*;
pub use footer::*;
pub use hero::*;
pub use modal::*;
pub use nav::*;
pub use pages::*;
pub use progress::*;
pub use upload::*;
