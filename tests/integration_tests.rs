//! Integration tests for browser docks
//!
//! These drive the host entry points end to end against a fake frontend and
//! mocked or recording browser engines.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Mutex;
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

use browser_dock::config::DockArea;
use browser_dock::dock::{BrowserContent, Panel, PanelKind, PanelState};
use browser_dock::geometry::{Point, Size};
use browser_dock::host::{ActionCallback, BrowserDockPlugin, Frontend, MainWindow};
use browser_dock::input::{
    InputEvent, KeyEvent, KeyKind, Modifiers, MouseButton, MouseButtons, PointerEvent, PointerKind,
    WheelEvent, map_to_browser,
};
use browser_dock::sampler::SampleOutcome;
use browser_dock::surface::{BrowserEngine, EngineFactory, RenderTarget, Snapshot};
use browser_dock::{Action, DockConfig, RenderMode, choose_mode, normalize_url};
use image::RgbaImage;
use mockall::mock;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

mock! {
    pub Engine {}

    impl BrowserEngine for Engine {
        fn load(&mut self, url: &str);
        fn size(&self) -> Size;
        fn resize(&mut self, size: Size);
        fn set_offscreen(&mut self, offscreen: bool);
        fn set_visible(&mut self, visible: bool);
        fn grab(&mut self) -> Option<Snapshot>;
        fn send_pointer(&mut self, event: &PointerEvent);
        fn send_wheel(&mut self, event: &WheelEvent);
        fn send_key(&mut self, event: &KeyEvent);
    }
}

/// Log records captured per test thread
struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, log::Level, String)>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn install_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

fn warnings_on_this_thread() -> Vec<String> {
    let me = thread::current().id();
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(id, level, _)| *id == me && *level == log::Level::Warn)
                .map(|(_, _, msg)| msg.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Default)]
struct Docks {
    docks: Vec<(DockArea, Panel)>,
}

impl MainWindow for Docks {
    fn add_dock(&mut self, area: DockArea, panel: Panel) {
        self.docks.push((area, panel));
    }
}

#[derive(Default)]
struct FakeFrontend {
    actions: Vec<(String, ActionCallback)>,
    main_window: Option<Docks>,
    windows: Vec<Panel>,
}

impl FakeFrontend {
    fn with_main_window() -> Self {
        Self {
            main_window: Some(Docks::default()),
            ..Default::default()
        }
    }

    fn trigger(&mut self, label: &str) {
        let callback = self
            .actions
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| Rc::clone(c))
            .expect("action registered");
        callback(self);
    }

    fn docks(&self) -> &[(DockArea, Panel)] {
        &self.main_window.as_ref().expect("main window").docks
    }

    fn dock_mut(&mut self, index: usize) -> &mut Panel {
        &mut self.main_window.as_mut().expect("main window").docks[index].1
    }
}

impl Frontend for FakeFrontend {
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

/// Engine that records injected input and serves a fixed frame
#[derive(Default)]
struct Recorded {
    size: Size,
    frame: Option<Snapshot>,
    loads: Vec<String>,
    pointers: Vec<PointerEvent>,
    keys: Vec<KeyEvent>,
}

struct RecordingEngine(Rc<RefCell<Recorded>>);

impl BrowserEngine for RecordingEngine {
    fn load(&mut self, url: &str) {
        self.0.borrow_mut().loads.push(url.to_string());
    }
    fn size(&self) -> Size {
        self.0.borrow().size
    }
    fn resize(&mut self, size: Size) {
        self.0.borrow_mut().size = size;
    }
    fn set_offscreen(&mut self, _offscreen: bool) {}
    fn set_visible(&mut self, _visible: bool) {}
    fn grab(&mut self) -> Option<Snapshot> {
        self.0.borrow().frame.clone()
    }
    fn send_pointer(&mut self, event: &PointerEvent) {
        self.0.borrow_mut().pointers.push(event.clone());
    }
    fn send_wheel(&mut self, _event: &WheelEvent) {}
    fn send_key(&mut self, event: &KeyEvent) {
        self.0.borrow_mut().keys.push(event.clone());
    }
}

struct RecordingFactory {
    engines: RefCell<Vec<(RenderTarget, Rc<RefCell<Recorded>>)>>,
}

impl RecordingFactory {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            engines: RefCell::new(Vec::new()),
        })
    }
}

impl EngineFactory for RecordingFactory {
    fn create(&self, target: RenderTarget) -> Box<dyn BrowserEngine> {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        self.engines.borrow_mut().push((target, Rc::clone(&recorded)));
        Box::new(RecordingEngine(recorded))
    }
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn load_plugin(
    pairs: &[(&str, &str)],
    factory: Rc<dyn EngineFactory>,
    frontend: &mut FakeFrontend,
) -> Rc<BrowserDockPlugin> {
    let plugin = Rc::new(BrowserDockPlugin::new(
        DockConfig::default(),
        factory,
        Rc::new(env(pairs)),
    ));
    plugin.load(frontend);
    plugin
}

fn press(x: f32, y: f32) -> InputEvent {
    InputEvent::Pointer(PointerEvent {
        kind: PointerKind::Press,
        position: Point::new(x, y),
        button: Some(MouseButton::Left),
        buttons: MouseButtons::NONE.with(MouseButton::Left),
        modifiers: Modifiers::default(),
    })
}

#[test]
fn test_x11_dock_uses_direct_embed() {
    install_logger();
    let before = warnings_on_this_thread().len();
    let factory = RecordingFactory::new();
    let mut frontend = FakeFrontend::with_main_window();
    load_plugin(&[("XDG_SESSION_TYPE", "x11")], factory.clone(), &mut frontend);

    frontend.trigger(Action::Dock.label());

    let docks = frontend.docks();
    assert_eq!(docks.len(), 1);
    assert_eq!(docks[0].1.kind(), PanelKind::Dock);
    assert!(matches!(docks[0].1.content(), BrowserContent::Direct(_)));
    assert_eq!(factory.engines.borrow()[0].0, RenderTarget::Visible);
    assert_eq!(warnings_on_this_thread().len(), before);
}

#[test]
fn test_hyprland_dock_uses_texture_and_logs_once() {
    install_logger();
    let before = warnings_on_this_thread().len();
    let factory = RecordingFactory::new();
    let mut frontend = FakeFrontend::with_main_window();
    load_plugin(
        &[("XDG_SESSION_TYPE", "wayland"), ("XDG_CURRENT_DESKTOP", "Hyprland")],
        factory.clone(),
        &mut frontend,
    );

    frontend.trigger(Action::Dock.label());

    assert_eq!(frontend.docks()[0].1.kind(), PanelKind::TextureDock);
    assert_eq!(factory.engines.borrow()[0].0, RenderTarget::Offscreen);

    let warnings = &warnings_on_this_thread()[before..];
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Hyprland=true"));
}

#[test]
fn test_dock_actions_without_main_window_do_nothing() {
    let factory = RecordingFactory::new();
    let mut frontend = FakeFrontend::default();
    load_plugin(&[("XDG_SESSION_TYPE", "wayland")], factory.clone(), &mut frontend);

    frontend.trigger(Action::Dock.label());
    frontend.trigger(Action::TextureDock.label());

    assert!(frontend.windows.is_empty());
    assert!(factory.engines.borrow().is_empty());
}

#[test]
fn test_window_action_needs_no_main_window() {
    let factory = RecordingFactory::new();
    let mut frontend = FakeFrontend::default();
    load_plugin(&[], factory, &mut frontend);

    frontend.trigger(Action::Window.label());

    assert_eq!(frontend.windows.len(), 1);
    assert_eq!(frontend.windows[0].state(), PanelState::Shown);
    assert!(frontend.windows[0].window_flags().is_some());
}

#[test]
fn test_address_submit_navigates_exactly_once() {
    let engine = RefCell::new(Some({
        let mut engine = MockEngine::new();
        engine.expect_set_offscreen().return_const(());
        engine.expect_set_visible().return_const(());
        engine.expect_resize().return_const(());
        engine.expect_size().return_const(Size::new(1280.0, 720.0));
        engine
            .expect_load()
            .withf(|url| url == "https://obsproject.com")
            .times(1)
            .return_const(());
        engine
            .expect_load()
            .withf(|url| url == "https://google.com")
            .times(1)
            .return_const(());
        engine
    }));
    let factory = move |_target: RenderTarget| -> Box<dyn BrowserEngine> {
        Box::new(engine.borrow_mut().take().expect("single engine"))
    };

    let mut frontend = FakeFrontend::with_main_window();
    load_plugin(&[], Rc::new(factory), &mut frontend);
    frontend.trigger(Action::TextureDock.label());

    let panel = frontend.dock_mut(0);
    panel.address_mut().set_text("google.com");
    panel.submit_address().unwrap();
    assert_eq!(panel.url(), Some("https://google.com"));
}

#[test]
fn test_null_snapshot_leaves_display_unchanged() {
    let mut engine = MockEngine::new();
    engine.expect_set_offscreen().return_const(());
    engine.expect_set_visible().return_const(());
    engine.expect_resize().return_const(());
    engine.expect_load().return_const(());
    engine.expect_size().return_const(Size::new(1280.0, 720.0));
    engine.expect_grab().times(1).returning(|| None);

    let engine = RefCell::new(Some(engine));
    let factory = move |_target: RenderTarget| -> Box<dyn BrowserEngine> {
        Box::new(engine.borrow_mut().take().expect("single engine"))
    };

    let mut panel = Panel::texture_dock(&factory, &DockConfig::default());
    let start = Instant::now();
    panel.show(start).unwrap();
    panel.resize_view(Size::new(320.0, 180.0));

    assert_eq!(
        panel.update(start + Duration::from_millis(150)),
        SampleOutcome::NotReady
    );
    match panel.content() {
        BrowserContent::Texture(texture) => {
            assert!(texture.display().pixmap().is_none());
            assert_eq!(texture.display().revision(), 0);
        }
        BrowserContent::Direct(_) => panic!("Expected texture content"),
    }
}

#[test]
fn test_click_in_scaled_preview_lands_in_browser_space() {
    let factory = RecordingFactory::new();
    let mut frontend = FakeFrontend::with_main_window();
    load_plugin(&[], factory.clone(), &mut frontend);
    frontend.trigger(Action::TextureDock.label());

    let recorded = Rc::clone(&factory.engines.borrow()[0].1);
    recorded.borrow_mut().frame = Some(Snapshot::new(RgbaImage::new(1280, 720)));

    let panel = frontend.dock_mut(0);
    panel.resize_view(Size::new(320.0, 180.0));
    let outcome = panel.update(Instant::now() + Duration::from_secs(1));
    assert_eq!(
        outcome,
        SampleOutcome::Published {
            width: 320,
            height: 180
        }
    );

    panel.handle_input(&press(160.0, 90.0)).unwrap();
    let mut key = KeyEvent::new(KeyKind::Press, 65, Modifiers::default());
    key.text = "a".to_string();
    panel.handle_input(&InputEvent::Key(key.clone())).unwrap();

    let recorded = recorded.borrow();
    assert_eq!(recorded.pointers.len(), 1);
    assert_eq!(recorded.pointers[0].position, Point::new(640.0, 360.0));
    assert_eq!(recorded.keys, vec![key]);
    assert_eq!(recorded.loads, vec!["https://obsproject.com".to_string()]);
}

#[test]
fn test_closing_texture_dock_stops_sampling() {
    let factory = RecordingFactory::new();
    let mut frontend = FakeFrontend::with_main_window();
    load_plugin(&[], factory.clone(), &mut frontend);
    frontend.trigger(Action::TextureDock.label());

    let panel = frontend.dock_mut(0);
    let now = Instant::now();
    assert!(panel.time_until_next_update(now).is_some());

    panel.close();
    assert_eq!(panel.state(), PanelState::Closed);
    assert_eq!(panel.update(now + Duration::from_secs(5)), SampleOutcome::Idle);
    assert!(panel.handle_input(&press(1.0, 1.0)).is_err());
}

proptest! {
    #[test]
    fn prop_normalize_prefixes_missing_scheme(s in "[a-zA-Z0-9./:?=_-]{0,40}") {
        prop_assume!(!s.starts_with("http://") && !s.starts_with("https://"));
        prop_assert_eq!(normalize_url(&s), format!("https://{}", s));
    }

    #[test]
    fn prop_normalize_keeps_http_schemes(
        scheme in prop_oneof![Just("http://"), Just("https://")],
        rest in "\\PC{0,30}",
    ) {
        let url = format!("{}{}", scheme, rest);
        prop_assert_eq!(normalize_url(&url), url);
    }

    #[test]
    fn prop_normalize_is_idempotent(s in "\\PC*") {
        let once = normalize_url(&s);
        prop_assert_eq!(normalize_url(&once), once.clone());
    }

    #[test]
    fn prop_remap_is_exact_at_corners(
        w in 1u32..=4096, h in 1u32..=4096,
        bw in 1u32..=4096, bh in 1u32..=4096,
    ) {
        let display = Size::from_pixels(w, h);
        let browser = Size::from_pixels(bw, bh);
        let (wf, hf, bwf, bhf) = (w as f32, h as f32, bw as f32, bh as f32);

        prop_assert_eq!(map_to_browser(Point::new(0.0, 0.0), display, browser), Point::new(0.0, 0.0));
        prop_assert_eq!(map_to_browser(Point::new(wf, 0.0), display, browser), Point::new(bwf, 0.0));
        prop_assert_eq!(map_to_browser(Point::new(0.0, hf), display, browser), Point::new(0.0, bhf));
        prop_assert_eq!(map_to_browser(Point::new(wf, hf), display, browser), Point::new(bwf, bhf));
    }

    #[test]
    fn prop_remap_is_linear(
        w in 1u32..=4096, h in 1u32..=4096,
        bw in 1u32..=4096, bh in 1u32..=4096,
        fx in 0.0f64..=1.0, fy in 0.0f64..=1.0,
    ) {
        let (x, y) = ((fx * w as f64) as f32, (fy * h as f64) as f32);
        let mapped = map_to_browser(Point::new(x, y), Size::from_pixels(w, h), Size::from_pixels(bw, bh));
        let expected_x = x as f64 * bw as f64 / w as f64;
        let expected_y = y as f64 * bh as f64 / h as f64;

        prop_assert!((mapped.x as f64 - expected_x).abs() <= expected_x.abs() * 1e-5 + 1e-3);
        prop_assert!((mapped.y as f64 - expected_y).abs() <= expected_y.abs() * 1e-5 + 1e-3);
    }

    #[test]
    fn prop_degenerate_display_passes_through(
        x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
        other in 0u32..2000, zero_width in any::<bool>(),
    ) {
        let display = if zero_width {
            Size::from_pixels(0, other)
        } else {
            Size::from_pixels(other, 0)
        };
        let point = Point::new(x, y);
        prop_assert_eq!(map_to_browser(point, display, Size::new(1280.0, 720.0)), point);
    }

    #[test]
    fn prop_choose_mode(
        session in prop_oneof![
            Just("wayland"), Just("Wayland"), Just("WAYLAND"),
            Just("x11"), Just("tty"), Just(""),
        ],
        marker in any::<bool>(),
        desktop in prop_oneof![Just("Hyprland"), Just("GNOME"), Just("KDE")],
    ) {
        let mut pairs = vec![("XDG_SESSION_TYPE", session), ("XDG_CURRENT_DESKTOP", desktop)];
        if marker {
            pairs.push(("WAYLAND_DISPLAY", "wayland-1"));
        }

        let expected = if marker || session.eq_ignore_ascii_case("wayland") {
            RenderMode::Texture
        } else {
            RenderMode::Direct
        };
        prop_assert_eq!(choose_mode(&env(&pairs)), expected);
    }
}
