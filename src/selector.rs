//! Choice between direct embedding and the texture workaround

use crate::environment::{DisplayEnvironment, Environment};

/// How a dock presents its browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Embed the engine's native surface directly
    Direct,
    /// Render offscreen, capture periodically, remap input
    Texture,
}

/// Texture on any Wayland session, direct otherwise.
///
/// The Hyprland flag does not influence the mode; it only appears in the
/// diagnostic logged by the caller.
pub fn mode_for(display: DisplayEnvironment) -> RenderMode {
    if display.wayland {
        RenderMode::Texture
    } else {
        RenderMode::Direct
    }
}

/// Probe `env` and pick a mode
pub fn choose_mode(env: &dyn Environment) -> RenderMode {
    mode_for(DisplayEnvironment::detect(env))
}
