//! Host application integration
//!
//! The host exposes a tools menu and, eventually, a main window. The plugin
//! registers one action per panel variant; each action runs with nothing but
//! the host itself and never reports failure back to it.

use std::rc::Rc;
use std::time::Instant;

use crate::config::{DockArea, DockConfig};
use crate::dock::Panel;
use crate::environment::{DisplayEnvironment, Environment};
use crate::selector::{RenderMode, mode_for};
use crate::surface::EngineFactory;
use crate::utils::{DockError, Result};

/// Callback the host invokes when a registered action is triggered
pub type ActionCallback = Rc<dyn Fn(&mut dyn Frontend)>;

/// The host's main window, able to accept docks
pub trait MainWindow {
    fn add_dock(&mut self, area: DockArea, panel: Panel);
}

/// Services the host application offers to the plugin
pub trait Frontend {
    /// Add an entry to the host's tools menu
    fn add_tools_action(&mut self, label: &str, callback: ActionCallback);

    /// The main window, if the host has created it yet
    fn main_window(&mut self) -> Option<&mut dyn MainWindow>;

    /// Take ownership of a free-standing panel window
    fn show_window(&mut self, panel: Panel);
}

/// Menu entries the plugin registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Free-standing window, always direct
    Window,
    /// Dock, texture mode picked automatically
    Dock,
    /// Dock, texture mode forced
    TextureDock,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Window, Action::Dock, Action::TextureDock];

    pub fn label(self) -> &'static str {
        match self {
            Self::Window => "Hypr Browser (Wayland-safe window)",
            Self::Dock => "Hypr Browser (Dock; auto Wayland workaround)",
            Self::TextureDock => "Hypr Browser (Force texture dock)",
        }
    }
}

/// Creates browser panels on behalf of the host
pub struct BrowserDockPlugin {
    config: DockConfig,
    engines: Rc<dyn EngineFactory>,
    env: Rc<dyn Environment>,
}

impl BrowserDockPlugin {
    pub fn new(config: DockConfig, engines: Rc<dyn EngineFactory>, env: Rc<dyn Environment>) -> Self {
        Self {
            config,
            engines,
            env,
        }
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Register every action with the host's tools menu
    pub fn load(self: &Rc<Self>, frontend: &mut dyn Frontend) {
        for action in Action::ALL {
            let plugin = Rc::clone(self);
            frontend.add_tools_action(
                action.label(),
                Rc::new(move |frontend: &mut dyn Frontend| plugin.trigger(action, frontend)),
            );
        }
        log::info!("Registered {} browser panel actions", Action::ALL.len());
    }

    /// Run `action`; failures are logged and swallowed
    pub fn trigger(&self, action: Action, frontend: &mut dyn Frontend) {
        let result = match action {
            Action::Window => self.create_window(frontend),
            Action::Dock => self.create_dock(frontend),
            Action::TextureDock => self.create_texture_dock(frontend),
        };

        if let Err(e) = result {
            log::debug!("{:?} action did nothing: {}", action, e);
        }
    }

    /// Free-standing window; needs no main window
    pub fn create_window(&self, frontend: &mut dyn Frontend) -> Result<()> {
        let mut panel = Panel::window(self.engines.as_ref(), &self.config);
        panel.show(Instant::now())?;
        frontend.show_window(panel);
        Ok(())
    }

    /// Dock in the mode the display environment calls for
    pub fn create_dock(&self, frontend: &mut dyn Frontend) -> Result<()> {
        let window = frontend
            .main_window()
            .ok_or(DockError::HostWindowUnavailable)?;

        let display = DisplayEnvironment::detect(self.env.as_ref());
        let area = self.config.default_dock_area;

        match mode_for(display) {
            RenderMode::Texture => {
                log::warn!(
                    "Wayland session detected (Hyprland={}); using texture-based dock to avoid browser reparent crash",
                    display.hyprland
                );
                let panel = Panel::texture_dock(self.engines.as_ref(), &self.config);
                attach_and_show(window, panel, area, false)
            }
            RenderMode::Direct => {
                let panel = Panel::dock(self.engines.as_ref(), &self.config);
                attach_and_show(window, panel, area, true)
            }
        }
    }

    /// Texture dock regardless of environment
    pub fn create_texture_dock(&self, frontend: &mut dyn Frontend) -> Result<()> {
        let window = frontend
            .main_window()
            .ok_or(DockError::HostWindowUnavailable)?;

        let panel = Panel::texture_dock(self.engines.as_ref(), &self.config);
        attach_and_show(window, panel, self.config.default_dock_area, false)
    }
}

/// Configure placement, show, then hand the dock to the main window
fn attach_and_show(
    window: &mut dyn MainWindow,
    mut panel: Panel,
    area: DockArea,
    floating: bool,
) -> Result<()> {
    panel.set_area(area);
    panel.set_floating(floating);
    panel.show(Instant::now())?;
    window.add_dock(area, panel);
    Ok(())
}
