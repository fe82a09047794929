//! Aspect-preserving frame scaling

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Largest size with the aspect ratio of `source` that fits in `target`.
///
/// Integer arithmetic, truncating, never smaller than 1x1.
pub fn fit_size(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = (source.0.max(1) as u64, source.1.max(1) as u64);
    let (tw, th) = (target.0 as u64, target.1 as u64);

    let width_at_full_height = th * sw / sh;
    let (w, h) = if width_at_full_height <= tw {
        (width_at_full_height, th)
    } else {
        (tw, tw * sh / sw)
    };

    (w.max(1) as u32, h.max(1) as u32)
}

/// Smoothly scale `frame` to fit inside `target`, keeping its aspect ratio
pub fn scale_to_fit(frame: &RgbaImage, target: (u32, u32)) -> RgbaImage {
    let (w, h) = fit_size(frame.dimensions(), target);
    if (w, h) == frame.dimensions() {
        return frame.clone();
    }
    imageops::resize(frame, w, h, FilterType::Triangle)
}
