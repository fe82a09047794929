//! Top-level panel variants and their lifecycle

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::{AddressBar, BrowserContent, DirectContent, TextureContent};
use crate::config::{DockArea, DockConfig};
use crate::geometry::Size;
use crate::input::InputEvent;
use crate::sampler::SampleOutcome;
use crate::surface::{EngineFactory, RenderTarget};
use crate::utils::{DockError, Result};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

/// Unique panel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

impl PanelId {
    fn next() -> Self {
        Self(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Presentation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Free-standing tool window
    Window,
    /// Dock with the browser embedded directly
    Dock,
    /// Dock showing captured frames of an offscreen browser
    TextureDock,
}

impl PanelKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Window | Self::Dock => "Hyprland Browser Wrapper",
            Self::TextureDock => "Hyprland Browser Wrapper (Wayland dock workaround)",
        }
    }

    pub fn object_name(self) -> &'static str {
        match self {
            Self::Window => "HyprBrowserWindow",
            Self::Dock => "HyprBrowserDock",
            Self::TextureDock => "HyprBrowserTextureDock",
        }
    }

    pub fn is_dock(self) -> bool {
        !matches!(self, Self::Window)
    }
}

/// What the user may do with a dock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockFeatures {
    pub movable: bool,
    pub closable: bool,
    pub floatable: bool,
}

impl DockFeatures {
    pub const ALL: DockFeatures = DockFeatures {
        movable: true,
        closable: true,
        floatable: true,
    };
}

/// Window-manager hints for the free-standing variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFlags {
    pub tool: bool,
    pub stays_on_top: bool,
    pub delete_on_close: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Created,
    /// Visible, raised and focused at least once
    Shown,
    Closed,
}

/// A browser panel: address field over browser content.
///
/// The host owns window-level placement; the panel owns its content and
/// tears it down on close.
pub struct Panel {
    id: PanelId,
    kind: PanelKind,
    state: PanelState,
    area: Option<DockArea>,
    floating: bool,
    raised: bool,
    active: bool,
    address: AddressBar,
    content: BrowserContent,
}

impl Panel {
    /// Tool window with a directly embedded browser
    pub fn window(engines: &dyn EngineFactory, config: &DockConfig) -> Self {
        let content = DirectContent::new(engines.create(RenderTarget::Visible), &config.home_url);
        Self::with_content(PanelKind::Window, BrowserContent::Direct(content), config)
    }

    /// Dock with a directly embedded browser
    pub fn dock(engines: &dyn EngineFactory, config: &DockConfig) -> Self {
        let content = DirectContent::new(engines.create(RenderTarget::Visible), &config.home_url);
        Self::with_content(PanelKind::Dock, BrowserContent::Direct(content), config)
    }

    /// Dock backed by the offscreen capture pipeline
    pub fn texture_dock(engines: &dyn EngineFactory, config: &DockConfig) -> Self {
        let content = TextureContent::new(engines.create(RenderTarget::Offscreen), config);
        Self::with_content(PanelKind::TextureDock, BrowserContent::Texture(content), config)
    }

    fn with_content(kind: PanelKind, content: BrowserContent, config: &DockConfig) -> Self {
        let panel = Self {
            id: PanelId::next(),
            kind,
            state: PanelState::Created,
            area: None,
            floating: !kind.is_dock(),
            raised: false,
            active: false,
            address: AddressBar::new(&config.address_placeholder),
            content,
        };
        log::debug!("Created {} #{}", kind.object_name(), panel.id.get());
        panel
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn object_name(&self) -> &'static str {
        self.kind.object_name()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PanelState::Closed
    }

    /// Dock capabilities; `None` for the free-standing window
    pub fn features(&self) -> Option<DockFeatures> {
        self.kind.is_dock().then_some(DockFeatures::ALL)
    }

    /// Dock areas the user may drag this panel into
    pub fn allowed_areas(&self) -> &'static [DockArea] {
        if self.kind.is_dock() {
            &DockArea::ALL[..]
        } else {
            &[]
        }
    }

    /// Window hints; `None` for docks
    pub fn window_flags(&self) -> Option<WindowFlags> {
        (!self.kind.is_dock()).then_some(WindowFlags {
            tool: true,
            stays_on_top: true,
            delete_on_close: true,
        })
    }

    pub fn area(&self) -> Option<DockArea> {
        self.area
    }

    /// Record where the host attached this dock
    pub fn set_area(&mut self, area: DockArea) {
        if self.kind.is_dock() {
            self.area = Some(area);
        }
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn set_floating(&mut self, floating: bool) {
        if self.kind.is_dock() {
            self.floating = floating;
        }
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Show, raise and activate; starts frame sampling in texture mode
    pub fn show(&mut self, now: Instant) -> Result<()> {
        if self.state == PanelState::Closed {
            return Err(DockError::PanelClosed);
        }

        self.state = PanelState::Shown;
        self.raised = true;
        self.active = true;

        match &mut self.content {
            BrowserContent::Direct(direct) => direct.set_visible(true),
            BrowserContent::Texture(texture) => {
                if !texture.is_sampling() {
                    texture.start(now);
                }
            }
        }
        Ok(())
    }

    pub fn address(&self) -> &AddressBar {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut AddressBar {
        &mut self.address
    }

    /// Navigate to whatever is in the address field
    pub fn submit_address(&mut self) -> Result<()> {
        if self.state == PanelState::Closed {
            return Err(DockError::PanelClosed);
        }

        let address = self.address.text().to_string();
        log::debug!("{} submitting {:?}", self.object_name(), address);

        match &mut self.content {
            BrowserContent::Direct(direct) => direct.navigate(&address),
            BrowserContent::Texture(texture) => texture.navigate(&address)?,
        }
        Ok(())
    }

    /// Current navigation target
    pub fn url(&self) -> Option<&str> {
        match &self.content {
            BrowserContent::Direct(direct) => Some(direct.url()),
            BrowserContent::Texture(texture) => texture.url(),
        }
    }

    pub fn content(&self) -> &BrowserContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut BrowserContent {
        &mut self.content
    }

    /// Lay out the browser view at `size`
    pub fn resize_view(&mut self, size: Size) {
        match &mut self.content {
            BrowserContent::Direct(direct) => direct.resize(size),
            BrowserContent::Texture(texture) => texture.display_mut().resize(size),
        }
    }

    /// Drive periodic work; called from the host's event loop
    pub fn update(&mut self, now: Instant) -> SampleOutcome {
        match &mut self.content {
            BrowserContent::Texture(texture) => texture.update(now),
            BrowserContent::Direct(_) => SampleOutcome::Idle,
        }
    }

    /// When the host should call [`update`](Self::update) next
    pub fn time_until_next_update(&self, now: Instant) -> Option<Duration> {
        match &self.content {
            BrowserContent::Texture(texture) => texture.time_until_next_frame(now),
            BrowserContent::Direct(_) => None,
        }
    }

    /// Deliver input that arrived at the browser view
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<()> {
        match &mut self.content {
            BrowserContent::Direct(direct) => {
                if self.state == PanelState::Closed {
                    return Err(DockError::PanelClosed);
                }
                direct.handle_input(event);
                Ok(())
            }
            BrowserContent::Texture(texture) => texture.handle_input(event),
        }
    }

    /// Tear down content; further calls are no-ops
    pub fn close(&mut self) {
        if self.state == PanelState::Closed {
            return;
        }

        match &mut self.content {
            BrowserContent::Direct(direct) => direct.set_visible(false),
            BrowserContent::Texture(texture) => texture.teardown(),
        }
        self.state = PanelState::Closed;
        self.active = false;
        log::debug!("Closed {} #{}", self.object_name(), self.id.get());
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.close();
    }
}
