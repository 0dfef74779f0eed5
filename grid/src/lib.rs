//! Grid editing engine for the pathfinding grid editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing state of the grid: translating pointer input into start, end and
//! barrier assignments, building the request sent to the external pathfinding
//! service, and turning the returned path into a cancelable animation plan.
//! The host Leptos layer is responsible only for wiring DOM events to the
//! engine, performing the HTTP call, and running timers for the
//! [`engine::Action`]s the engine returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Editor`] and testable [`engine::EditorCore`] |
//! | [`cell`] | Cell identities and the start/end/barrier state |
//! | [`layout`] | Pixel ↔ cell conversions for the rendered grid |
//! | [`input`] | Brushes, mouse buttons, and the pointer state machine |
//! | [`wire`] | Request/response DTOs for the pathfinding service |
//! | [`animation`] | Path animation plans and cancellation tickets |
//! | [`render`] | Visual roles and the [`render::CellRenderer`] seam |
//! | [`svg`] | SVG implementation of the renderer |
//! | [`error`] | Editor error type |
//! | [`consts`] | Shared constants (grid size, cell size, step delay) |

pub mod animation;
pub mod cell;
pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod svg;
pub mod wire;
