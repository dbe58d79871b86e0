//! Rounded-rectangle geometry.
//!
//! Two views of the same shape:
//! - [`RoundedRect`] / [`rounded_rect_path`]: a drawable path, rasterized by
//!   whoever fills it
//! - [`Outline`] / [`rounded_rect_outline`]: a declarative descriptor handed to
//!   a compositor, which decides how to clip with it

mod outline;
pub(crate) mod rounded_rect;

pub use outline::{rounded_rect_outline, Outline};
pub use rounded_rect::{rounded_rect_path, RoundedRect};

/// Cubic Bézier handle length for a quarter circle of radius 1.
pub(crate) const KAPPA: f32 = 0.552_284_8;
