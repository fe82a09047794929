//! # Browser Dock - Wayland-safe browser panels
//!
//! Embeds a web browser in a host application's dockable panels on display
//! servers where the browser's native surface cannot be reparented. Under
//! Wayland the browser renders offscreen; its frames are captured on a timer,
//! scaled into the visible panel, and input on the panel is remapped back
//! into the browser's coordinate space.
//!
//! ## Architecture
//!
//! - **environment**: Wayland and Hyprland detection from the process environment
//! - **selector**: Direct embed versus texture mode
//! - **surface**: Browser engine capability interface, offscreen and display surfaces
//! - **sampler**: Timer-driven frame capture and aspect-preserving scaling
//! - **input**: Input event types and display-to-browser remapping
//! - **dock**: Panel variants, address field and content lifecycle
//! - **host**: Menu registration and the panel entry points
//! - **ui**: Reference eframe/egui host with a test-pattern engine
//! - **utils**: Shared utilities and error types

pub mod config;
pub mod dock;
pub mod environment;
pub mod geometry;
pub mod host;
pub mod input;
pub mod navigation;
pub mod sampler;
pub mod selector;
pub mod surface;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::DockConfig;
pub use host::{Action, BrowserDockPlugin, Frontend, MainWindow};
pub use navigation::normalize_url;
pub use selector::{RenderMode, choose_mode};
pub use utils::error::{DockError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Hyprland Browser Wrapper";
pub const AUTHOR: &str = "Hyprland User";
pub const DESCRIPTION: &str =
    "A wrapper to force browser docks to render correctly on Hyprland/Wayland";
