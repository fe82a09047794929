//! Browser and display surfaces
//!
//! The browser engine sits behind [`BrowserEngine`]; this crate never links a
//! real engine. [`OffscreenBrowserSurface`] drives an engine that must never
//! reach a real screen position, and [`DisplaySurface`] is the visible
//! element that shows captured frames in its place.

mod display;
mod engine;
mod offscreen;
mod snapshot;

pub use display::DisplaySurface;
pub use engine::{BrowserEngine, EngineFactory, RenderTarget};
pub use offscreen::OffscreenBrowserSurface;
pub use snapshot::Snapshot;
