//! Paint model shared by the strategies and the presenter.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, image pattern)
//!
//! Geometry types remain in `coords` and `geometry`.

pub mod color;
pub mod paint;
pub mod pattern;

pub use color::Color;
pub use paint::Paint;
pub use pattern::{ImagePattern, TileMode};
