//! Platform abstraction layer
//!
//! Glue between winit and the simulation:
//! - Input event accumulation and per-frame snapshots
//!
//! Window creation and frame timing live in the binary's event loop.

pub mod input;

pub use input::InputTracker;
