//! Auto-advancing carousel state.
//!
//! Time is fed in by the event loop through [`Carousel::tick`], so the
//! carousel itself never owns a timer thread and is fully deterministic in
//! tests.

use std::time::Duration;
use tracing::debug;

/// How manual prev/next navigation interacts with autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualPolicy {
    /// Navigating stops autoplay (video strip)
    Pause,
    /// Navigating restarts the interval, autoplay stays on (testimonials, image slider)
    Restart,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
    /// Items shown at once; 1 for a plain carousel
    visible: usize,
    autoplay: bool,
    /// False after `cancel`, until `resume`
    running: bool,
    interval: Duration,
    elapsed: Duration,
    policy: ManualPolicy,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, policy: ManualPolicy) -> Self {
        Self {
            index: 0,
            len,
            visible: 1,
            autoplay: true,
            running: true,
            interval,
            elapsed: Duration::ZERO,
            policy,
        }
    }

    /// Carousel that shows `visible` consecutive items at a time.
    pub fn windowed(len: usize, visible: usize, interval: Duration, policy: ManualPolicy) -> Self {
        let mut carousel = Self::new(len, interval, policy);
        carousel.set_visible(visible);
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Last index a window may start at.
    fn max_start(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    /// Feed elapsed time. Returns true if the index moved.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running || !self.autoplay || self.len == 0 || self.interval.is_zero() {
            return false;
        }
        self.elapsed += elapsed;
        let mut moved = false;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.advance();
            moved = true;
        }
        moved
    }

    fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index >= self.max_start() {
            0
        } else {
            self.index + 1
        };
    }

    fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            self.max_start()
        } else {
            self.index - 1
        };
    }

    fn after_manual(&mut self) {
        match self.policy {
            ManualPolicy::Pause => self.autoplay = false,
            ManualPolicy::Restart => self.elapsed = Duration::ZERO,
        }
    }

    pub fn next(&mut self) {
        self.advance();
        self.after_manual();
        debug!(index = self.index, autoplay = self.autoplay, "Carousel next");
    }

    pub fn prev(&mut self) {
        self.retreat();
        self.after_manual();
        debug!(index = self.index, autoplay = self.autoplay, "Carousel prev");
    }

    /// Jump via a progress dot; follows the manual navigation policy.
    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = index.min(self.max_start());
        self.after_manual();
    }

    /// Pick an item directly. Always stops autoplay.
    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = index.min(self.max_start());
        self.autoplay = false;
        debug!(index = self.index, "Carousel item selected");
    }

    /// Click inside the carousel without choosing an item.
    pub fn click(&mut self) {
        self.autoplay = false;
    }

    pub fn hover_enter(&mut self) {
        self.autoplay = false;
    }

    pub fn hover_leave(&mut self) {
        self.autoplay = true;
        self.elapsed = Duration::ZERO;
    }

    /// Stop the timer when the owning screen goes away.
    pub fn cancel(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Restart the timer when the owning screen comes back.
    pub fn resume(&mut self) {
        self.running = true;
        self.elapsed = Duration::ZERO;
    }

    /// Change the rotation length, re-clamping the index.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.visible = self.visible.clamp(1, len.max(1));
        self.index = if len == 0 {
            0
        } else {
            self.index.min(self.max_start())
        };
    }

    /// Change how many items are shown at once (window resize).
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.clamp(1, self.len.max(1));
        self.index = self.index.min(self.max_start());
    }

    /// Item indices currently on screen, first to last.
    pub fn window(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..self.visible).map(|i| (self.index + i) % self.len).collect()
    }

    /// Slot within the window that is highlighted (the middle card).
    pub fn active_slot(&self) -> usize {
        self.visible / 2
    }

    pub fn active_item(&self) -> Option<usize> {
        self.window().get(self.active_slot()).copied()
    }

    /// Number of progress dots: one per reachable window start.
    pub fn dot_count(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.max_start() + 1
        }
    }
}
