use std::time::Duration;

use tracing::debug;

use crate::auto_advance::AutoAdvance;
use crate::carousel::Carousel;
use crate::constants::{TEXT_SCROLL_DURATION, TEXT_TICK_PERIOD};
use crate::error::CarouselError;

/// Auto-advancing list of display strings, one line visible at a time.
#[derive(Debug, Clone)]
pub struct TextCarousel {
    carousel: Carousel<String>,
    ticker: AutoAdvance,
    scroll_duration: Duration,
    scroll_elapsed: Duration,
}

impl TextCarousel {
    pub fn new(texts: Vec<String>) -> Result<Self, CarouselError> {
        Self::with_timing(texts, TEXT_TICK_PERIOD, TEXT_SCROLL_DURATION)
    }

    pub fn with_timing(
        texts: Vec<String>,
        period: Duration,
        scroll_duration: Duration,
    ) -> Result<Self, CarouselError> {
        Ok(Self {
            carousel: Carousel::auto_advancing(texts)?,
            ticker: AutoAdvance::new(period),
            scroll_duration,
            scroll_elapsed: scroll_duration,
        })
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn current_text(&self) -> &str {
        self.carousel.current_item()
    }

    pub fn texts(&self) -> &[String] {
        self.carousel.items()
    }

    /// Stops or restarts the timer. The scroll in progress still finishes.
    pub fn set_paused(&mut self, paused: bool) {
        if paused == self.ticker.is_paused() {
            return;
        }
        if paused {
            self.ticker.pause();
        } else {
            self.ticker.resume();
        }
        debug!(paused, index = self.current_index(), "tagline ticker");
    }

    pub fn is_paused(&self) -> bool {
        self.ticker.is_paused()
    }

    /// Applies every tick that came due during `dt`.
    pub fn update(&mut self, dt: Duration) {
        self.scroll_elapsed = (self.scroll_elapsed + dt).min(self.scroll_duration);
        for _ in 0..self.ticker.update(dt) {
            self.carousel.tick();
            self.scroll_elapsed = Duration::ZERO;
        }
    }

    /// Linear progress of the slide toward the current line, in `[0, 1]`.
    /// Renderers apply their own easing curve on top.
    pub fn scroll_progress(&self) -> f32 {
        if self.scroll_duration.is_zero() {
            return 1.0;
        }
        (self.scroll_elapsed.as_secs_f32() / self.scroll_duration.as_secs_f32()).min(1.0)
    }

    /// Vertical offset of the strip for a given line height at `progress`
    /// between the previous line and the current one.
    ///
    /// Wrapping from the last line to the first scrolls back through the
    /// whole strip.
    pub fn scroll_offset(&self, line_height: f32, progress: f32) -> f32 {
        let len = self.carousel.len();
        let current = self.current_index();
        let previous = (current + len - 1) % len;
        let from = previous as f32 * line_height;
        let to = current as f32 * line_height;
        from + (to - from) * progress.clamp(0.0, 1.0)
    }
}
