//! Hexa TUI - a terminal browser for a curated collection of script snippets
//!
//! This library provides the core functionality for browsing the built-in
//! script catalog: the catalog data model, the three-view navigation machine
//! (home, category list, script detail), and the copy-to-clipboard action.

pub mod catalog;
pub mod ui;
