//! Progress reporting for the scan and delete phases.

pub mod render;
pub mod throttle;

pub use render::{bar_line, format_clock, ProgressRenderer, ProgressSample, DEFAULT_FILL_GLYPH};
pub use throttle::{RenderGate, DEFAULT_INTERVAL};
