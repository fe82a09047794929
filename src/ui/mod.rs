//! Reference egui host
//!
//! A small eframe application that plays the host's part: a tools menu the
//! plugin registers into, a main window with four dock areas, and floating
//! tool windows. Paired with [`TestPatternEngine`] it exercises the whole
//! capture pipeline without a real browser engine.

mod app;
mod input;
mod test_pattern;
mod view;

pub use app::{DockHostApp, HostMainWindow, run};
pub use input::{ViewContext, translate};
pub use test_pattern::TestPatternEngine;
pub use view::PanelView;
