//! GPU device and window surface.
//!
//! Creates the wgpu device and queue, keeps the surface configured for
//! the window's current size, and hands out one encoder + view per frame.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
