use std::time::Duration;

/// Debounce latch of a carousel.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CarouselState {
    Idle,                           // Ready to accept an index change
    Settling { elapsed: Duration }, // An index change is in flight
}

impl CarouselState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, CarouselState::Settling { .. })
    }
}

/// Whether index-changing operations respect the latch.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum DebouncePolicy {
    #[default]
    Guarded,   // User-driven slider: one change in flight at a time
    Unguarded, // Auto-advance: timer is the only trigger, changes settle immediately
}
