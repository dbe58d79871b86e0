//! Rendering surface host.
//!
//! The host owns whichever strategy is active, the layer surface it paints
//! into and the frame surface handed to the presenter. UI shells talk to the
//! host only; they never call a strategy directly.

mod config;
mod render_host;

pub use config::{HostConfig, LayerMode};
pub use render_host::{Frame, RenderHost, RenderTiming};
