//! Open/closed state for dropdowns and drawers.
//!
//! A [`DisclosureGroup`] tracks several disclosures. Disclosures that share an
//! exclusivity key are mutually exclusive: opening one closes the others.
//! Regions are recorded at render time so a click anywhere else can close
//! whatever is open.

use crate::utils::layout::hit;
use ratatui::layout::Rect;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    exclusive: Option<&'static str>,
    state: Disclosure,
    /// Area of the open panel
    panel: Option<Rect>,
    /// Area of the button that toggles it
    trigger: Option<Rect>,
}

#[derive(Debug, Clone)]
pub struct DisclosureGroup<K> {
    entries: Vec<Entry<K>>,
}

impl<K> Default for DisclosureGroup<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + std::fmt::Debug> DisclosureGroup<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a disclosure, closed, optionally in an exclusivity group.
    pub fn with(mut self, key: K, exclusive: Option<&'static str>) -> Self {
        if self.entry(key).is_none() {
            self.entries.push(Entry {
                key,
                exclusive,
                state: Disclosure::Closed,
                panel: None,
                trigger: None,
            });
        }
        self
    }

    fn entry(&self, key: K) -> Option<&Entry<K>> {
        self.entries.iter().find(|e| e.key == key)
    }

    fn entry_mut(&mut self, key: K) -> Option<&mut Entry<K>> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub fn state(&self, key: K) -> Disclosure {
        self.entry(key).map_or(Disclosure::Closed, |e| e.state)
    }

    pub fn is_open(&self, key: K) -> bool {
        self.state(key).is_open()
    }

    pub fn any_open(&self) -> bool {
        self.entries.iter().any(|e| e.state.is_open())
    }

    pub fn open(&mut self, key: K) {
        let Some(exclusive) = self.entry(key).map(|e| e.exclusive) else {
            return;
        };
        if let Some(group) = exclusive {
            for sibling in &mut self.entries {
                if sibling.key != key && sibling.exclusive == Some(group) {
                    sibling.state = Disclosure::Closed;
                }
            }
        }
        if let Some(entry) = self.entry_mut(key) {
            entry.state = Disclosure::Open;
        }
        debug!(?key, "Disclosure opened");
    }

    pub fn close(&mut self, key: K) {
        if let Some(entry) = self.entry_mut(key) {
            entry.state = Disclosure::Closed;
        }
    }

    pub fn toggle(&mut self, key: K) {
        if self.is_open(key) {
            self.close(key);
        } else {
            self.open(key);
        }
    }

    pub fn close_all(&mut self) {
        for entry in &mut self.entries {
            entry.state = Disclosure::Closed;
        }
    }

    /// Record where a disclosure's panel and trigger were drawn.
    pub fn set_regions(&mut self, key: K, panel: Option<Rect>, trigger: Option<Rect>) {
        if let Some(entry) = self.entry_mut(key) {
            entry.panel = panel;
            entry.trigger = trigger;
        }
    }

    /// Close every open disclosure the click landed outside of.
    ///
    /// Clicks on a trigger are left to the trigger's own toggle handling.
    /// Returns the keys that were closed.
    pub fn click_outside(&mut self, column: u16, row: u16) -> Vec<K> {
        let mut closed = Vec::new();
        for entry in &mut self.entries {
            if !entry.state.is_open() {
                continue;
            }
            let inside = [entry.panel, entry.trigger]
                .into_iter()
                .flatten()
                .any(|area| hit(area, column, row));
            if !inside {
                entry.state = Disclosure::Closed;
                closed.push(entry.key);
            }
        }
        closed
    }
}
