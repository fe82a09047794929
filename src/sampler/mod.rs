//! Periodic frame capture from an offscreen surface
//!
//! Each tick copies the latest frame out of the browser surface, scales it to
//! fit the display surface and publishes it there. A tick costs one full
//! raster copy plus a resize, all on the host's UI thread, so the cadence is
//! a trade between interactivity and CPU.

mod scale;
mod schedule;

pub use scale::{fit_size, scale_to_fit};
pub use schedule::RecurringTask;

use std::time::{Duration, Instant};

use crate::geometry::Size;
use crate::surface::{DisplaySurface, OffscreenBrowserSurface};

/// Result of one sampling opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Not due yet, or the sampler is stopped
    Idle,
    /// Due, but the surface had nothing rendered
    NotReady,
    /// A frame of this size was handed to the display
    Published { width: u32, height: u32 },
}

/// Timer-driven puller from browser surface to display surface
#[derive(Debug, Clone)]
pub struct FrameSampler {
    task: RecurringTask,
    /// Scaling target while the display has no size yet
    fallback_size: Size,
}

impl FrameSampler {
    /// A stopped sampler
    pub fn new(interval: Duration, fallback_size: Size) -> Self {
        Self {
            task: RecurringTask::new(interval),
            fallback_size,
        }
    }

    pub fn start(&mut self, now: Instant) {
        log::debug!("Frame sampler started ({:?} interval)", self.task.interval());
        self.task.start(now);
    }

    pub fn stop(&mut self) {
        if self.task.is_running() {
            log::debug!("Frame sampler stopped");
        }
        self.task.stop();
    }

    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    pub fn interval(&self) -> Duration {
        self.task.interval()
    }

    /// Time until the next tick, for hosts that schedule repaints
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.task.time_until_next(now)
    }

    /// Sample if a tick is due at `now`
    pub fn poll(
        &mut self,
        now: Instant,
        surface: &mut OffscreenBrowserSurface,
        display: &mut DisplaySurface,
    ) -> SampleOutcome {
        if !self.task.poll(now) {
            return SampleOutcome::Idle;
        }
        self.sample(surface, display)
    }

    /// One tick: capture, scale, publish. A missing frame leaves the
    /// display untouched.
    pub fn sample(
        &self,
        surface: &mut OffscreenBrowserSurface,
        display: &mut DisplaySurface,
    ) -> SampleOutcome {
        let Some(snapshot) = surface.snapshot() else {
            log::trace!("No frame rendered yet, skipping tick");
            return SampleOutcome::NotReady;
        };

        let target = if display.size().is_empty() {
            self.fallback_size
        } else {
            display.size()
        };

        let scaled = scale_to_fit(snapshot.image(), target.to_pixels());
        let (width, height) = scaled.dimensions();
        display.set_pixmap(scaled);

        SampleOutcome::Published { width, height }
    }
}
