//! Cornerlab engine.
//!
//! Renders an image into a view with rounded corners, three different ways,
//! and measures what each way costs per frame:
//!
//! - [`strategy`]: the three corner strategies behind one trait
//! - [`host`]: owns the active strategy, its layer and the render timing
//! - [`compositor`]: applies declarative clip outlines when layers are composited
//! - [`geometry`], [`effect`], [`raster`], [`paint`], [`bitmap`]: the CPU building blocks
//! - [`window`], [`device`], [`render`], [`input`], [`core`]: the winit + wgpu
//!   runtime that puts host frames on screen

pub mod bitmap;
pub mod compositor;
pub mod coords;
pub mod core;
pub mod device;
pub mod effect;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod strategy;
pub mod time;
pub mod window;
