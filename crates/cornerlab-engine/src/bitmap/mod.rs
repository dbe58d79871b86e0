//! Source bitmaps and the resize-time resampler.
//!
//! A [`SourceImage`] is decoded once and never modified. Every size the view
//! takes on gets its own derived buffer from [`resample`]; the original stays
//! intact for the next resize.

mod resample;
mod source;

pub use resample::{resample, to_pixmap};
pub use source::SourceImage;
