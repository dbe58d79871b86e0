/// What the runtime should do after a failed surface acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface reconfigured; try again on the next redraw.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Out of memory; exit.
    Fatal,
}
