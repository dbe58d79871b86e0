//! Layer compositing and outline clipping.
//!
//! A strategy that wants the compositor to clip for it publishes an
//! [`Outline`](crate::geometry::Outline) through the [`ClipShapeSink`] it was handed. The
//! [`Compositor`] applies that outline when a layer is merged into the frame
//! (software) or leaves it pending for the GPU presenter (hardware).

mod sink;

pub use sink::{ClipShapeSink, Compositor, SharedClipSink};
