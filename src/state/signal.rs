//! Process-wide observable values.
//!
//! The event loop publishes the terminal size and the active page's scroll
//! offset through a [`Signal<Viewport>`]. Screens subscribe when they are
//! entered and drop their [`Subscription`] when they are left, which is all
//! it takes to unsubscribe.

use std::sync::OnceLock;
use tokio::sync::watch;

/// Width below which the layout collapses to a single column.
pub const COMPACT_WIDTH: u16 = 80;
/// Width below which two columns are used instead of three.
pub const MEDIUM_WIDTH: u16 = 120;
/// Scroll offset (rows) past which the header shrinks.
pub const SCROLLED_THRESHOLD: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Medium,
    Wide,
}

/// Terminal size plus the scroll offset of the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub scroll: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll: 0,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        if self.width < COMPACT_WIDTH {
            Breakpoint::Compact
        } else if self.width < MEDIUM_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        self.breakpoint() == Breakpoint::Compact
    }

    /// Cards shown side by side in a carousel.
    pub fn visible_cards(&self) -> usize {
        match self.breakpoint() {
            Breakpoint::Compact => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll > SCROLLED_THRESHOLD
    }
}

/// A value many consumers can observe.
#[derive(Debug)]
pub struct Signal<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Publish a value. Subscribers are only notified when it changed.
    pub fn set(&self, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Update in place, notifying only when the closure reports a change.
    pub fn update(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.sender.send_if_modified(f)
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A live subscription; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// The latest value if it changed since the last call.
    pub fn poll(&mut self) -> Option<T> {
        match self.receiver.has_changed() {
            Ok(true) => Some(self.receiver.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// The latest value, marking it seen.
    pub fn current(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }
}

/// The shared viewport signal.
pub fn viewport() -> &'static Signal<Viewport> {
    static VIEWPORT: OnceLock<Signal<Viewport>> = OnceLock::new();
    VIEWPORT.get_or_init(|| Signal::new(Viewport::default()))
}
