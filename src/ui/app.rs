//! Reference host application using eframe/egui

use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui;

use super::view::PanelView;
use crate::config::DockArea;
use crate::dock::{Panel, PanelId};
use crate::host::{ActionCallback, BrowserDockPlugin, Frontend, MainWindow};

/// Main window: docks attached to its four edges
#[derive(Default)]
pub struct HostMainWindow {
    docks: Vec<(DockArea, Panel)>,
}

impl HostMainWindow {
    pub fn docks(&self) -> &[(DockArea, Panel)] {
        &self.docks
    }
}

impl MainWindow for HostMainWindow {
    fn add_dock(&mut self, area: DockArea, panel: Panel) {
        log::info!("Docking {} on the {:?} edge", panel.object_name(), area);
        self.docks.push((area, panel));
    }
}

/// Host application exposing a tools menu and dock areas
pub struct DockHostApp {
    actions: Vec<(String, ActionCallback)>,
    main_window: Option<HostMainWindow>,
    windows: Vec<Panel>,
    views: HashMap<PanelId, PanelView>,
    status: String,
}

impl DockHostApp {
    /// Create the host and let `plugin` register its actions
    pub fn new(_cc: &eframe::CreationContext<'_>, plugin: Rc<BrowserDockPlugin>, status: String) -> Self {
        let mut app = Self {
            actions: Vec::new(),
            main_window: Some(HostMainWindow::default()),
            windows: Vec::new(),
            views: HashMap::new(),
            status,
        };
        plugin.load(&mut app);
        app
    }

    /// Render the menu bar, returning the triggered action
    fn render_menu(&self, ui: &mut egui::Ui) -> Option<ActionCallback> {
        let mut triggered = None;
        ui.horizontal(|ui| {
            ui.menu_button("Tools", |ui| {
                for (label, callback) in &self.actions {
                    if ui.button(label).clicked() {
                        triggered = Some(Rc::clone(callback));
                    }
                }
            });
            ui.separator();
            ui.label(&self.status);
        });
        triggered
    }

    fn render_dock(
        ctx: &egui::Context,
        area: DockArea,
        panel: &mut Panel,
        view: &mut PanelView,
    ) {
        let id = egui::Id::new(("dock", panel.id().get()));

        if panel.is_floating() {
            let mut open = true;
            egui::Window::new(panel.title())
                .id(id)
                .open(&mut open)
                .default_size([480.0, 360.0])
                .show(ctx, |ui| {
                    if ui.small_button("Dock").clicked() {
                        panel.set_floating(false);
                    }
                    view.show(ui, panel);
                });
            if !open {
                panel.close();
            }
            return;
        }

        let contents = |ui: &mut egui::Ui| {
            ui.horizontal(|ui| {
                ui.label(panel.title());
                if ui.small_button("×").clicked() {
                    panel.close();
                }
                if ui.small_button("Float").clicked() {
                    panel.set_floating(true);
                }
            });
            if panel.is_open() {
                view.show(ui, panel);
            }
        };

        match area {
            DockArea::Left => {
                egui::SidePanel::left(id).resizable(true).default_width(420.0).show(ctx, contents);
            }
            DockArea::Right => {
                egui::SidePanel::right(id).resizable(true).default_width(420.0).show(ctx, contents);
            }
            DockArea::Top => {
                egui::TopBottomPanel::top(id).resizable(true).default_height(300.0).show(ctx, contents);
            }
            DockArea::Bottom => {
                egui::TopBottomPanel::bottom(id).resizable(true).default_height(300.0).show(ctx, contents);
            }
        }
    }

    fn render_window(ctx: &egui::Context, panel: &mut Panel, view: &mut PanelView) {
        let mut open = true;
        egui::Window::new(panel.title())
            .id(egui::Id::new(("window", panel.id().get())))
            .open(&mut open)
            .order(egui::Order::Foreground)
            .default_size([800.0, 600.0])
            .show(ctx, |ui| view.show(ui, panel));
        if !open {
            panel.close();
        }
    }

    /// Drop closed panels and their textures
    fn reap_closed(&mut self) {
        let mut closed = Vec::new();
        self.windows.retain(|p| {
            if !p.is_open() {
                closed.push(p.id());
            }
            p.is_open()
        });
        if let Some(main) = self.main_window.as_mut() {
            main.docks.retain(|(_, p)| {
                if !p.is_open() {
                    closed.push(p.id());
                }
                p.is_open()
            });
        }
        for id in closed {
            self.views.remove(&id);
        }
    }

    fn panels_mut(&mut self) -> impl Iterator<Item = &mut Panel> {
        self.main_window
            .iter_mut()
            .flat_map(|w| w.docks.iter_mut().map(|(_, p)| p))
            .chain(self.windows.iter_mut())
    }

    fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.main_window
            .iter()
            .flat_map(|w| w.docks.iter().map(|(_, p)| p))
            .chain(self.windows.iter())
    }
}

/// Run due sampling ticks, including panels that were not painted this frame
fn poll_panels<'a>(panels: impl Iterator<Item = &'a mut Panel>, now: Instant) {
    for panel in panels.filter(|p| p.is_open()) {
        panel.update(now);
    }
}

/// Earliest sampling deadline across `panels`
fn next_repaint<'a>(panels: impl Iterator<Item = &'a Panel>, now: Instant) -> Option<Duration> {
    panels.filter_map(|p| p.time_until_next_update(now)).min()
}

impl Frontend for DockHostApp {
    fn add_tools_action(&mut self, label: &str, callback: ActionCallback) {
        self.actions.push((label.to_string(), callback));
    }

    fn main_window(&mut self) -> Option<&mut dyn MainWindow> {
        self.main_window.as_mut().map(|w| w as &mut dyn MainWindow)
    }

    fn show_window(&mut self, panel: Panel) {
        self.windows.push(panel);
    }
}

impl eframe::App for DockHostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let mut triggered = None;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            triggered = self.render_menu(ui);
        });
        if let Some(callback) = triggered {
            callback(self);
        }
        poll_panels(self.panels_mut(), now);

        // Docked panels must be laid out before the central area
        let mut docks = self
            .main_window
            .as_mut()
            .map(|w| std::mem::take(&mut w.docks))
            .unwrap_or_default();
        for (area, panel) in docks.iter_mut() {
            let view = self.views.entry(panel.id()).or_default();
            Self::render_dock(ctx, *area, panel, view);
        }
        if let Some(main) = self.main_window.as_mut() {
            docks.append(&mut main.docks);
            main.docks = docks;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label("Open a browser panel from the Tools menu");
            });
        });

        let mut windows = std::mem::take(&mut self.windows);
        for panel in windows.iter_mut() {
            let view = self.views.entry(panel.id()).or_default();
            Self::render_window(ctx, panel, view);
        }
        windows.append(&mut self.windows);
        self.windows = windows;

        self.reap_closed();

        if let Some(delay) = next_repaint(self.panels(), now) {
            ctx.request_repaint_after(delay);
        }
    }
}

/// Run the reference host
pub fn run(plugin: Rc<BrowserDockPlugin>, status: String) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(crate::NAME),
        ..Default::default()
    };

    eframe::run_native(
        crate::NAME,
        options,
        Box::new(move |cc| Ok(Box::new(DockHostApp::new(cc, plugin, status)))),
    )
}
