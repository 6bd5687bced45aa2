//! Page stack navigation — held-key continuous scrolling.
//!
//! - `scroll` — the position state machine
//! - `ticker` — per-frame driver with explicit start/cancel

pub mod scroll;
pub mod ticker;
