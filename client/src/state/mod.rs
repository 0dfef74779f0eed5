//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in `RwSignal` context providers so the control bar and the grid
//! host coordinate without holding references to each other.

pub mod ui;
