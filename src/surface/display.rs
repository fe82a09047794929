//! Visible element showing captured frames

use image::RgbaImage;

use crate::geometry::Size;

/// On-screen stand-in for an offscreen browser.
///
/// Holds the last scaled frame and the size the host laid it out at. The
/// displayed size rarely equals the browser's logical size.
#[derive(Debug, Clone)]
pub struct DisplaySurface {
    size: Size,
    min_size: Size,
    pixmap: Option<RgbaImage>,
    /// Bumped on every new pixmap so hosts can skip re-uploads
    revision: u64,
    placeholder: String,
    focused: bool,
}

impl DisplaySurface {
    pub fn new(min_size: Size, placeholder: impl Into<String>) -> Self {
        Self {
            size: Size::ZERO,
            min_size,
            pixmap: None,
            revision: 0,
            placeholder: placeholder.into(),
            focused: false,
        }
    }

    /// Size the host last laid this surface out at
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn pixmap(&self) -> Option<&RgbaImage> {
        self.pixmap.as_ref()
    }

    pub fn set_pixmap(&mut self, pixmap: RgbaImage) {
        self.pixmap = Some(pixmap);
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Text shown until the first frame arrives
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }
}
