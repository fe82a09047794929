//! Dockable browser panels
//!
//! A panel stacks a fixed-height address field over a browser view that
//! fills the remaining space. The view is either the engine itself (direct
//! embed) or the offscreen capture pipeline (texture mode).

mod address;
mod content;
mod panel;

pub use address::AddressBar;
pub use content::{BrowserContent, DirectContent, TextureContent};
pub use panel::{DockFeatures, Panel, PanelId, PanelKind, PanelState, WindowFlags};
