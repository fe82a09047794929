//! What a panel shows below its address field

use std::time::{Duration, Instant};

use crate::config::DockConfig;
use crate::geometry::Size;
use crate::input::{InputEvent, InputRemapper};
use crate::navigation::normalize_url;
use crate::sampler::{FrameSampler, SampleOutcome};
use crate::surface::{BrowserEngine, DisplaySurface, OffscreenBrowserSurface, Snapshot};
use crate::utils::{DockError, Result};

/// The engine's own surface embedded as-is
pub struct DirectContent {
    browser: Box<dyn BrowserEngine>,
    url: String,
}

impl DirectContent {
    /// Embed `browser` and start loading `home_url`
    pub fn new(mut browser: Box<dyn BrowserEngine>, home_url: &str) -> Self {
        let url = normalize_url(home_url);
        browser.load(&url);
        Self { browser, url }
    }

    pub fn navigate(&mut self, address: &str) {
        let url = normalize_url(address);
        self.browser.load(&url);
        self.url = url;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The embedded surface follows the layout size
    pub fn resize(&mut self, size: Size) {
        if !size.is_empty() && self.browser.size() != size {
            self.browser.resize(size);
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.browser.set_visible(visible);
    }

    /// Current frame of the embedded surface, for hosts that paint it
    pub fn frame(&mut self) -> Option<Snapshot> {
        self.browser.grab().filter(|s| !s.is_empty())
    }

    /// Input goes straight through; display and browser share one space
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(e) => self.browser.send_pointer(e),
            InputEvent::Wheel(e) => self.browser.send_wheel(e),
            InputEvent::Key(e) => self.browser.send_key(e),
        }
    }
}

/// Offscreen surface, sampler and remapper wired to one display surface
pub struct TextureContent {
    sampler: FrameSampler,
    remapper: InputRemapper,
    display: DisplaySurface,
    /// Released on teardown, after the sampler has stopped
    surface: Option<OffscreenBrowserSurface>,
}

impl TextureContent {
    /// Build the pipeline around an offscreen `engine`; the sampler stays
    /// stopped until [`start`](Self::start)
    pub fn new(engine: Box<dyn BrowserEngine>, config: &DockConfig) -> Self {
        let mut surface = OffscreenBrowserSurface::new(engine, config.browser_size);
        surface.navigate(&config.home_url);

        Self {
            sampler: FrameSampler::new(config.sample_interval, config.min_display_size),
            remapper: InputRemapper::new(),
            display: DisplaySurface::new(config.min_display_size, &config.preview_placeholder),
            surface: Some(surface),
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.surface.is_some() {
            self.sampler.start(now);
        }
    }

    pub fn navigate(&mut self, address: &str) -> Result<()> {
        self.surface_mut()?.navigate(address);
        Ok(())
    }

    pub fn url(&self) -> Option<&str> {
        self.surface.as_ref().map(|s| s.url())
    }

    /// Run a sampling tick if one is due
    pub fn update(&mut self, now: Instant) -> SampleOutcome {
        match self.surface.as_mut() {
            Some(surface) => self.sampler.poll(now, surface, &mut self.display),
            None => SampleOutcome::Idle,
        }
    }

    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        self.sampler.time_until_next(now)
    }

    /// Remap and forward an event arriving at the display surface
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(DockError::PanelClosed)?;
        self.remapper.dispatch(event, &mut self.display, surface);
        Ok(())
    }

    pub fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplaySurface {
        &mut self.display
    }

    pub fn surface(&self) -> Option<&OffscreenBrowserSurface> {
        self.surface.as_ref()
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler.is_running()
    }

    /// Stop sampling, then release the browser surface
    pub fn teardown(&mut self) {
        self.sampler.stop();
        self.surface = None;
    }

    fn surface_mut(&mut self) -> Result<&mut OffscreenBrowserSurface> {
        self.surface.as_mut().ok_or(DockError::PanelClosed)
    }
}

/// Panel content in either presentation mode
pub enum BrowserContent {
    Direct(DirectContent),
    Texture(TextureContent),
}

impl BrowserContent {
    pub fn is_texture(&self) -> bool {
        matches!(self, Self::Texture(_))
    }
}
