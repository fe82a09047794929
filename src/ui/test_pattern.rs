//! Built-in engine that paints a diagnostic test pattern
//!
//! Stands in for a real browser so the capture and remapping pipeline can be
//! checked by eye: the background colour follows the URL, wheel input scrolls
//! the stripes, and a marker is drawn where each click landed in browser
//! coordinates.

use image::{Rgba, RgbaImage};

use crate::geometry::{Point, Size};
use crate::input::{KeyEvent, KeyKind, PointerEvent, PointerKind, WheelEvent};
use crate::surface::{BrowserEngine, RenderTarget, Snapshot};

const STRIPE: u32 = 48;
const MARKER: i64 = 6;

pub struct TestPatternEngine {
    target: RenderTarget,
    url: String,
    size: Size,
    offscreen: bool,
    visible: bool,
    cursor: Option<Point>,
    clicks: Vec<Point>,
    scroll: f32,
    typed: String,
}

impl TestPatternEngine {
    pub fn new(target: RenderTarget) -> Self {
        Self {
            target,
            url: String::new(),
            size: Size::new(800.0, 600.0),
            offscreen: false,
            visible: false,
            cursor: None,
            clicks: Vec::new(),
            scroll: 0.0,
            typed: String::new(),
        }
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Characters typed since the last navigation
    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn clicks(&self) -> &[Point] {
        &self.clicks
    }

    fn base_color(&self) -> [u8; 3] {
        // FNV-1a over the URL keeps colours stable per page
        let hash = self
            .url
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
                (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
            });
        [
            96 + (hash & 0x7f) as u8,
            96 + ((hash >> 8) & 0x7f) as u8,
            96 + ((hash >> 16) & 0x7f) as u8,
        ]
    }

    fn render(&self) -> RgbaImage {
        let (width, height) = self.size.to_pixels();
        let [r, g, b] = self.base_color();
        let offset = self.scroll.rem_euclid((STRIPE * 2) as f32) as u32;

        let mut image = RgbaImage::from_fn(width, height, |_, y| {
            if ((y + offset) / STRIPE) % 2 == 0 {
                Rgba([r, g, b, 255])
            } else {
                Rgba([r / 2, g / 2, b / 2, 255])
            }
        });

        if let Some(cursor) = self.cursor {
            draw_crosshair(&mut image, cursor);
        }
        for click in &self.clicks {
            draw_marker(&mut image, *click);
        }
        image
    }
}

impl BrowserEngine for TestPatternEngine {
    fn load(&mut self, url: &str) {
        log::info!("Test pattern loading {}", url);
        self.url = url.to_string();
        self.clicks.clear();
        self.typed.clear();
        self.scroll = 0.0;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn set_offscreen(&mut self, offscreen: bool) {
        self.offscreen = offscreen;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn grab(&mut self) -> Option<Snapshot> {
        if self.size.is_empty() || self.url.is_empty() {
            return None;
        }
        Some(Snapshot::new(self.render()))
    }

    fn send_pointer(&mut self, event: &PointerEvent) {
        self.cursor = Some(event.position);
        if event.kind == PointerKind::Press {
            self.clicks.push(event.position);
        }
    }

    fn send_wheel(&mut self, event: &WheelEvent) {
        let delta = if event.pixel_delta.y != 0.0 {
            event.pixel_delta.y
        } else {
            event.angle_delta.y / 120.0 * STRIPE as f32
        };
        self.scroll -= delta;
    }

    fn send_key(&mut self, event: &KeyEvent) {
        if event.kind == KeyKind::Press {
            self.typed.push_str(&event.text);
        }
    }
}

fn put(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_crosshair(image: &mut RgbaImage, at: Point) {
    let (cx, cy) = (at.x.round() as i64, at.y.round() as i64);
    for d in -12..=12 {
        put(image, cx + d, cy, Rgba([255, 255, 255, 255]));
        put(image, cx, cy + d, Rgba([255, 255, 255, 255]));
    }
}

fn draw_marker(image: &mut RgbaImage, at: Point) {
    let (cx, cy) = (at.x.round() as i64, at.y.round() as i64);
    for dy in -MARKER..=MARKER {
        for dx in -MARKER..=MARKER {
            put(image, cx + dx, cy + dy, Rgba([220, 30, 30, 255]));
        }
    }
}
