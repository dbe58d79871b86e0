//! GPU presentation.
//!
//! The CPU side produces finished frames; the renderers here only move them
//! onto the window surface. Each renderer owns its GPU resources (pipelines,
//! buffers, textures) and rebuilds them lazily when the surface format or
//! frame size changes.
//!
//! Convention:
//! - positions are physical pixels (top-left origin, +Y down)
//! - vertex shaders convert to NDC using a viewport uniform

mod ctx;
mod surface_blit;

pub use ctx::{RenderCtx, RenderTarget};
pub use surface_blit::SurfaceBlitRenderer;
