//! A headless sliding-window controller for virtualized lists.
//!
//! For frame scheduling and scroll/render plumbing, see the `windowed-list-adapter` crate.
//!
//! A list over millions of logical rows only ever materializes a small, contiguous window of
//! them. This crate owns that window: it decides when the window has to move, regenerates the
//! rows, and computes the content-offset corrections that keep the row under the viewport
//! visually in place across reloads.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll-end offsets relative to the first materialized row
//! - jump requests to arbitrary logical indices
//! - a one-frame deferred delivery of each [`ScheduledCorrection`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod options;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use options::{
    DEFAULT_FRAME_DELAY_MS, DEMO_ITEM_HEIGHT, DEMO_TOTAL_COUNT, DEMO_WINDOW_SIZE,
    OnChangeCallback, WindowOptions,
};
pub use state::WindowSnapshot;
pub use types::{Anchor, Color, ContentOffset, CorrectionKind, Row, ScheduledCorrection};
pub use window::WindowList;
