//! Dock configuration
//!
//! Defaults match the shipped plugin; a few values can be overridden from the
//! environment for experimenting with the frame-rate/CPU trade-off.

use std::time::Duration;

use crate::environment::Environment;
use crate::geometry::Size;
use crate::utils::{DockError, Result};

pub const SAMPLE_INTERVAL_VAR: &str = "BROWSER_DOCK_SAMPLE_MS";
pub const HOME_URL_VAR: &str = "BROWSER_DOCK_HOME_URL";
pub const SURFACE_SIZE_VAR: &str = "BROWSER_DOCK_SURFACE_SIZE";

/// Lower bound for the sampling cadence
pub const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(16);

/// Where a dock attaches on the host main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockArea {
    Left,
    Right,
    Top,
    Bottom,
}

impl DockArea {
    pub const ALL: [DockArea; 4] = [
        DockArea::Left,
        DockArea::Right,
        DockArea::Top,
        DockArea::Bottom,
    ];
}

/// Dock configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DockConfig {
    /// How often the offscreen surface is captured
    pub sample_interval: Duration,
    /// Logical size of the offscreen browser surface
    pub browser_size: Size,
    /// First page loaded by every panel
    pub home_url: String,
    /// Minimum preview size, also the scaling target while the preview is empty
    pub min_display_size: Size,
    /// Area the dock entry points attach to
    pub default_dock_area: DockArea,
    pub address_placeholder: String,
    pub preview_placeholder: String,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_millis(150),
            browser_size: Size::new(1280.0, 720.0),
            home_url: "https://obsproject.com".to_string(),
            min_display_size: Size::new(320.0, 180.0),
            default_dock_area: DockArea::Right,
            address_placeholder: "Enter URL here (e.g., https://google.com)".to_string(),
            preview_placeholder: "Rendering (Wayland-safe dock)...".to_string(),
        }
    }
}

impl DockConfig {
    /// Defaults with environment overrides applied.
    ///
    /// Malformed overrides are logged and ignored.
    pub fn from_env(env: &dyn Environment) -> Self {
        let mut config = Self::default();

        if let Some(raw) = env.var(SAMPLE_INTERVAL_VAR) {
            match parse_interval(&raw) {
                Ok(interval) => config.sample_interval = interval,
                Err(e) => log::warn!("Ignoring override: {}", e),
            }
        }

        if let Some(url) = env.var(HOME_URL_VAR) {
            if !url.trim().is_empty() {
                config.home_url = url.trim().to_string();
            }
        }

        if let Some(raw) = env.var(SURFACE_SIZE_VAR) {
            match parse_size(SURFACE_SIZE_VAR, &raw) {
                Ok(size) => config.browser_size = size,
                Err(e) => log::warn!("Ignoring override: {}", e),
            }
        }

        config
    }
}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> DockError {
    DockError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_interval(raw: &str) -> Result<Duration> {
    let millis: u64 = raw
        .trim()
        .parse()
        .map_err(|e| invalid(SAMPLE_INTERVAL_VAR, raw, format!("{}", e)))?;
    Ok(Duration::from_millis(millis).max(MIN_SAMPLE_INTERVAL))
}

/// Parse `WIDTHxHEIGHT`, both positive
fn parse_size(key: &str, raw: &str) -> Result<Size> {
    let (w, h) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid(key, raw, "expected WIDTHxHEIGHT"))?;

    let width: u32 = w
        .trim()
        .parse()
        .map_err(|_| invalid(key, raw, "width is not a number"))?;
    let height: u32 = h
        .trim()
        .parse()
        .map_err(|_| invalid(key, raw, "height is not a number"))?;

    if width == 0 || height == 0 {
        return Err(invalid(key, raw, "dimensions must be non-zero"));
    }

    Ok(Size::from_pixels(width, height))
}
