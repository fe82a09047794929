//! Display-server detection
//!
//! Answers two questions from process environment state: is this a Wayland
//! session, and is the compositor Hyprland. Missing or non-unicode variables
//! read as "not set"; nothing here fails.

use std::collections::HashMap;

/// Variables whose presence alone marks a Wayland session
pub const WAYLAND_MARKERS: [&str; 2] = ["WAYLAND_DISPLAY", "WAYLAND_SOCKET"];
/// Session type reported by the login manager
pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";
/// Desktop identifier list (colon separated on most desktops)
pub const CURRENT_DESKTOP_VAR: &str = "XDG_CURRENT_DESKTOP";

const WAYLAND_SESSION: &str = "wayland";
const HYPRLAND: &str = "hyprland";

/// Read-only view of environment variables
pub trait Environment {
    /// Value of `key`, lossily decoded
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is present at all, even if empty
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// True if a Wayland marker variable is set or the session type is "wayland"
pub fn is_wayland_session(env: &dyn Environment) -> bool {
    if WAYLAND_MARKERS.iter().any(|key| env.is_set(key)) {
        return true;
    }

    env.var(SESSION_TYPE_VAR)
        .map(|session| session.eq_ignore_ascii_case(WAYLAND_SESSION))
        .unwrap_or(false)
}

/// True if the desktop identifier mentions Hyprland, ignoring case
pub fn is_hyprland(env: &dyn Environment) -> bool {
    env.var(CURRENT_DESKTOP_VAR)
        .map(|desktop| desktop.to_ascii_lowercase().contains(HYPRLAND))
        .unwrap_or(false)
}

/// Snapshot of both probes, taken once per decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayEnvironment {
    pub wayland: bool,
    pub hyprland: bool,
}

impl DisplayEnvironment {
    /// Probe the given environment
    pub fn detect(env: &dyn Environment) -> Self {
        Self {
            wayland: is_wayland_session(env),
            hyprland: is_hyprland(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_environment() {
        let empty = env(&[]);
        assert!(!is_wayland_session(&empty));
        assert!(!is_hyprland(&empty));
    }

    #[test]
    fn test_wayland_display_marker() {
        assert!(is_wayland_session(&env(&[("WAYLAND_DISPLAY", "wayland-1")])));
    }

    #[test]
    fn test_wayland_socket_marker_even_if_empty() {
        assert!(is_wayland_session(&env(&[("WAYLAND_SOCKET", "")])));
    }

    #[test]
    fn test_session_type_case_insensitive() {
        assert!(is_wayland_session(&env(&[("XDG_SESSION_TYPE", "Wayland")])));
        assert!(is_wayland_session(&env(&[("XDG_SESSION_TYPE", "WAYLAND")])));
        assert!(!is_wayland_session(&env(&[("XDG_SESSION_TYPE", "x11")])));
        assert!(!is_wayland_session(&env(&[("XDG_SESSION_TYPE", "wayland-ish")])));
    }

    #[test]
    fn test_hyprland_substring() {
        assert!(is_hyprland(&env(&[("XDG_CURRENT_DESKTOP", "Hyprland")])));
        assert!(is_hyprland(&env(&[("XDG_CURRENT_DESKTOP", "hyprland:wlroots")])));
        assert!(!is_hyprland(&env(&[("XDG_CURRENT_DESKTOP", "GNOME")])));
    }

    #[test]
    fn test_detect() {
        let detected = DisplayEnvironment::detect(&env(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "Hyprland"),
        ]));
        assert_eq!(
            detected,
            DisplayEnvironment {
                wayland: true,
                hyprland: true
            }
        );
    }

    #[test]
    fn test_process_environment_missing_var() {
        let process = ProcessEnvironment;
        assert!(process.var("BROWSER_DOCK_SURELY_UNSET_VARIABLE").is_none());
    }
}
