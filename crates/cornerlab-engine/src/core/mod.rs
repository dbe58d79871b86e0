//! Contract between the window runtime and the application.
//!
//! The runtime owns the window, GPU and input state; the application only sees
//! them through [`FrameCtx`] while a frame is being produced.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
