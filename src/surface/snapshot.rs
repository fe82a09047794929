//! Raster frames captured from a browser engine

use image::RgbaImage;

use crate::geometry::Size;

/// One captured RGBA frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    image: RgbaImage,
}

impl Snapshot {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::from_pixels(self.width(), self.height())
    }

    /// A zero-area frame carries nothing worth showing
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
