//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data for one frame
//! - [`renderer`]: Entry point that draws a frame
//! - [`components`]: Per-widget renderers
//! - [`helpers`]: Cursor, width and highlighting utilities
//! - [`theme`]: Palettes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{DisplayItem, EmptyState, ScreenView, UIViewModel};
