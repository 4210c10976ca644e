/// Viewport: presentation surface size and visibility.
///
/// Starts hidden; the app reveals it once the load gate opens.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    visible: bool,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Make the viewport visible. Returns true only on the first call.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
