//! # UI Module
//!
//! Terminal user interface components for Hexa.
//!
//! ## Components
//!
//! - [`navigator`] - the three-view navigation state machine
//! - [`App`] - session state (navigation, selection, toast, clipboard)
//! - [`mod@render`] - rendering functions for drawing the TUI
//! - [`clipboard`] - clipboard abstraction behind the copy action
//! - [`toast`] - copy success/failure notifications
//! - [`theme`] - built-in color themes
//! - [`config`] - persisted user configuration
//!
//! ## Views
//!
//! One of three views fills the body at any time:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                       │
//! ├─────────────────────┬───────────────────────────┤
//! │  Home: categories   │  Category details         │
//! │  List: scripts      │  Script details           │
//! │  Detail: metadata over the full script source   │
//! ├─────────────────────┴───────────────────────────┤
//! │                    Footer           ┌─ Toast ─┐ │
//! └─────────────────────────────────────┴──────────┴┘
//! ```
//!
//! Enter descends (home -> list -> detail), Esc ascends, and `y` on the
//! detail view copies the script source to the system clipboard.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod navigator;
pub mod render;
pub mod theme;
pub mod toast;

pub use app::App;
pub use render::render;
