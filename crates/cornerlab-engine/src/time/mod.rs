//! Time subsystem.
//!
//! Measures how long strategies take to paint, independent of the runtime.
//! Intended usage:
//! - one `RenderClock` per host
//! - wrap each strategy render in `start()` / `finish()`

mod render_clock;

pub use render_clock::{RenderClock, RenderSpan, RenderTime};
