//! Paint-time path effects.

mod corner_path;

pub use corner_path::CornerPathEffect;
