//! Page navigation state.
//!
//! The page is a vertical stack of numbered sections. [`SectionTracker`] is
//! fed scroll events and decides which section is current; [`NavMenu`] holds
//! the side menu's open flag. Views receive both explicitly.

use std::fmt;

use tracing::debug;

use crate::constants::AT_TOP_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Introduce,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Introduce,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Two-digit number shown in the menu, "01" to "05".
    pub fn number(self) -> &'static str {
        match self {
            SectionId::Introduce => "01",
            SectionId::Experience => "02",
            SectionId::Projects => "03",
            SectionId::Skills => "04",
            SectionId::Contact => "05",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Introduce => "INTRODUCE",
            SectionId::Experience => "EXPERIENCE",
            SectionId::Projects => "PROJECTS",
            SectionId::Skills => "SKILLS",
            SectionId::Contact => "CONTACT",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    id: SectionId,
    offset_top: f32,
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    placements: Vec<Placement>,
    current: SectionId,
    at_top: bool,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
            current: SectionId::Introduce,
            at_top: true,
        }
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a rendered section starts. Re-registering moves it.
    pub fn register(&mut self, id: SectionId, offset_top: f32) {
        match self.placements.iter_mut().find(|p| p.id == id) {
            Some(placement) => placement.offset_top = offset_top,
            None => self.placements.push(Placement { id, offset_top }),
        }
        self.placements.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn offset_of(&self, id: SectionId) -> Option<f32> {
        self.placements.iter().find(|p| p.id == id).map(|p| p.offset_top)
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn is_at_top(&self) -> bool {
        self.at_top
    }

    /// Re-evaluates the current section for a scroll position.
    ///
    /// The current section is the last one, in page order, whose top is at or
    /// above the middle of the viewport. Returns the new section when it changed.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) -> Option<SectionId> {
        self.at_top = scroll_y < AT_TOP_THRESHOLD;

        let probe = scroll_y + viewport_height / 2.0;
        let found = self
            .placements
            .iter()
            .rev()
            .find(|p| p.offset_top <= probe)
            .map(|p| p.id)?;

        if found == self.current {
            return None;
        }
        debug!(from = %self.current, to = %found, scroll_y, "current section changed");
        self.current = found;
        Some(found)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks a section from the menu; the menu closes.
    pub fn select(&mut self, id: SectionId) -> SectionId {
        self.open = false;
        id
    }
}
