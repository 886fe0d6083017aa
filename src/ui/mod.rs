//! Interactive terminal front-end for the result panel.
//!
//! [`App`] owns the current snapshot, the cursor and the per-row thumbnail
//! state; the submodules implement input handling, drawing and the event loop.

mod app;
pub mod components;
mod config;
mod runtime;
pub mod theme;

pub use app::{App, Flow};
pub use config::UiConfig;
pub use theme::{Theme, by_name, default_theme};
