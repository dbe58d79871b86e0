//! CPU raster targets.
//!
//! Strategies paint into a [`RenderSurface`]; the compositor merges layers
//! into the frame surface that the presenter uploads.

pub mod shape;
pub mod surface;

pub use shape::RectShape;
pub use surface::RenderSurface;
