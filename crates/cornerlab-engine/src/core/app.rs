use winit::event::WindowEvent;

use super::ctx::FrameCtx;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Raw window events, delivered before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Produces one frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Whether another frame is wanted without new input.
    ///
    /// Polled when the event loop goes idle. Returning `false` lets the
    /// runtime sleep until the next window event.
    fn needs_redraw(&self) -> bool {
        true
    }
}
