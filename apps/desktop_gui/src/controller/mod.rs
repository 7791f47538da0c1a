//! Controller layer: key events and the calculator state machine, kept
//! free of any UI dependency so transitions are testable headless.

pub mod events;
pub mod reducer;
