/// Platform capability for an exclusive full-viewport rendering mode.
///
/// The timer only asks for the mode to be entered or left; what "full
/// screen" means belongs to the surface.
pub trait FullscreenSurface {
    fn is_fullscreen(&self) -> bool;
    fn enter(&mut self);
    fn exit(&mut self);
}

/// Terminal full screen: while zoomed, the timer panel owns the whole
/// terminal and the task panel is not drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoomedViewport {
    zoomed: bool,
}

impl ZoomedViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FullscreenSurface for ZoomedViewport {
    fn is_fullscreen(&self) -> bool {
        self.zoomed
    }

    fn enter(&mut self) {
        self.zoomed = true;
    }

    fn exit(&mut self) {
        self.zoomed = false;
    }
}
