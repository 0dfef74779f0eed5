//! Networking modules for talking to the pathfinding service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor only builds requests and interprets replies; this layer owns
//! the HTTP transport.

pub mod api;
