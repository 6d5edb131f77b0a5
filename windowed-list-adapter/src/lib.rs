//! Adapter utilities for the `windowed-list` crate.
//!
//! The `windowed-list` crate decides when the window moves and what the scroll container must be
//! corrected to, but never waits for anything. This crate supplies the pieces an adapter needs
//! to run it inside a UI loop:
//!
//! - A tick-driven deferred-task queue that holds corrections for one frame
//! - Traits for the scroll container and the render surface
//! - A controller that ties them together and re-renders only when the rows changed
//! - The jump buttons of the demo list page
//!
//! This crate is framework-agnostic (no bindings to any specific UI toolkit).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod jump;
mod scheduler;
mod surface;


pub use controller::Controller;
pub use jump::{JumpButton, default_jump_buttons};
pub use scheduler::FrameScheduler;
pub use surface::{RenderSurface, ScrollContainer};
