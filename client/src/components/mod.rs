//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and the grid surface while reading and
//! writing shared state from Leptos context providers.

pub mod controls;
pub mod grid_host;
