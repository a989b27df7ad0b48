//! Bounded circular carousel.
//!
//! A [`Carousel`] owns a fixed, non-empty list of items and an index into it.
//! Index changes wrap around both ends and engage a debounce latch that stays
//! held for the settle delay; while it is held, further user-driven changes are
//! dropped. The host advances time either frame by frame with
//! [`Carousel::update`] or by releasing the latch itself with
//! [`Carousel::settle`] when its own timer fires.

use std::time::Duration;

use tracing::{debug, trace};

use crate::error::CarouselError;
use crate::state::{CarouselState, DebouncePolicy};

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current_index: usize,
    state: CarouselState,
    settle_delay: Duration,
    policy: DebouncePolicy,
}

impl<T> Carousel<T> {
    /// Creates a user-driven carousel positioned on the first item.
    pub fn new(items: Vec<T>, settle_delay: Duration) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            current_index: 0,
            state: CarouselState::Idle,
            settle_delay,
            policy: DebouncePolicy::Guarded,
        })
    }

    /// Creates a carousel for a timer-driven source: changes settle immediately.
    pub fn auto_advancing(items: Vec<T>) -> Result<Self, CarouselError> {
        Ok(Self::new(items, Duration::ZERO)?.with_policy(DebouncePolicy::Unguarded))
    }

    pub fn with_policy(mut self, policy: DebouncePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.current_index]
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Time left before the latch releases, `None` when idle.
    pub fn settle_remaining(&self) -> Option<Duration> {
        match self.state {
            CarouselState::Idle => None,
            CarouselState::Settling { elapsed } => Some(self.settle_delay.saturating_sub(elapsed)),
        }
    }

    /// Moves one item forward, wrapping to the first.
    ///
    /// Returns the new index, or `None` when a transition is still settling.
    /// A single-item carousel still engages the latch.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_transitioning() {
            trace!(index = self.current_index, "next ignored, transition in flight");
            return None;
        }
        let target = (self.current_index + 1) % self.items.len();
        Some(self.begin_transition(target))
    }

    /// Moves one item back, wrapping to the last.
    pub fn previous(&mut self) -> Option<usize> {
        if self.is_transitioning() {
            trace!(index = self.current_index, "previous ignored, transition in flight");
            return None;
        }
        let len = self.items.len();
        let target = (self.current_index + len - 1) % len;
        Some(self.begin_transition(target))
    }

    /// Jumps straight to `target`.
    ///
    /// Out-of-range targets are rejected before anything else and leave the
    /// state untouched. Jumping to the current item, or while a transition is
    /// settling, is a no-op that returns `Ok(None)`.
    pub fn go_to(&mut self, target: usize) -> Result<Option<usize>, CarouselError> {
        let len = self.items.len();
        if target >= len {
            debug!(target, len, "go_to rejected, index out of range");
            return Err(CarouselError::InvalidIndex { index: target, len });
        }
        if self.is_transitioning() || target == self.current_index {
            trace!(target, index = self.current_index, "go_to ignored");
            return Ok(None);
        }
        Ok(Some(self.begin_transition(target)))
    }

    /// Timer step of an auto-advancing carousel.
    ///
    /// Advances regardless of the latch and leaves it as it is.
    pub fn tick(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.items.len();
        trace!(index = self.current_index, "tick");
        self.current_index
    }

    /// Advances the settle timer by `dt` and releases the latch once the settle
    /// delay has fully elapsed.
    pub fn update(&mut self, dt: Duration) {
        if let CarouselState::Settling { elapsed } = self.state {
            let elapsed = elapsed + dt;
            if elapsed >= self.settle_delay {
                self.settle();
            } else {
                self.state = CarouselState::Settling { elapsed };
            }
        }
    }

    /// Releases the latch immediately.
    pub fn settle(&mut self) {
        if self.is_transitioning() {
            trace!(index = self.current_index, "transition settled");
        }
        self.state = CarouselState::Idle;
    }

    fn begin_transition(&mut self, target: usize) -> usize {
        debug!(
            from = self.current_index,
            to = target,
            len = self.items.len(),
            "carousel transition"
        );
        self.current_index = target;
        if self.policy == DebouncePolicy::Guarded {
            self.state = CarouselState::Settling { elapsed: Duration::ZERO };
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const D: Duration = Duration::from_millis(300);

    fn abc() -> Carousel<&'static str> {
        Carousel::new(vec!["A", "B", "C"], D).unwrap()
    }

    fn settled_next<T>(c: &mut Carousel<T>) -> Option<usize> {
        let index = c.next();
        c.update(c.settle_delay());
        index
    }

    #[test]
    fn starts_on_first_item_idle() {
        let c = abc();
        assert_eq!(c.current_index(), 0);
        assert_eq!(*c.current_item(), "A");
        assert!(!c.is_transitioning());
        assert_eq!(c.settle_remaining(), None);
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = Carousel::<u8>::new(Vec::new(), D).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn next_is_debounced_then_wraps() {
        let mut c = abc();
        assert_eq!(c.next(), Some(1));
        assert_eq!(*c.current_item(), "B");

        // Latch held: second press is absorbed.
        assert_eq!(c.next(), None);
        assert_eq!(c.current_index(), 1);

        c.update(D);
        assert_eq!(c.next(), Some(2));
        assert_eq!(*c.current_item(), "C");

        c.update(D);
        assert_eq!(c.next(), Some(0));
        assert_eq!(*c.current_item(), "A");
    }

    #[test]
    fn latch_holds_until_full_delay() {
        let mut c = abc();
        c.next();
        c.update(Duration::from_millis(299));
        assert!(c.is_transitioning());
        assert_eq!(c.settle_remaining(), Some(Duration::from_millis(1)));
        assert_eq!(c.previous(), None);

        c.update(Duration::from_millis(1));
        assert!(!c.is_transitioning());
        assert_eq!(c.previous(), Some(0));
    }

    #[test]
    fn frame_sized_steps_release_latch() {
        let mut c = abc();
        c.next();
        let frame = Duration::from_secs_f32(1.0 / 60.0);
        let mut frames = 0;
        while c.is_transitioning() {
            c.update(frame);
            frames += 1;
        }
        assert!((18..=19).contains(&frames));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut c = abc();
        assert_eq!(c.previous(), Some(2));
        assert_eq!(*c.current_item(), "C");
    }

    #[test]
    fn previous_then_next_restores_index() {
        for n in 1..=6 {
            let mut c = Carousel::new((0..n).collect::<Vec<_>>(), D).unwrap();
            for start in 0..n {
                c.settle();
                c.go_to(start).unwrap();
                c.settle();
                c.previous();
                c.update(D);
                c.next();
                c.update(D);
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn k_settled_nexts_land_on_k_mod_n() {
        for n in 1..=7usize {
            let mut c = Carousel::new(vec![(); n], D).unwrap();
            for k in 1..=3 * n {
                settled_next(&mut c);
                assert_eq!(c.current_index(), k % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn single_item_still_engages_latch() {
        let mut c = Carousel::new(vec!["only"], D).unwrap();
        assert_eq!(c.next(), Some(0));
        assert!(c.is_transitioning());
        assert_eq!(c.previous(), None);

        c.update(D);
        assert_eq!(c.previous(), Some(0));
        assert!(c.is_transitioning());
    }

    #[test]
    fn go_to_jumps_and_engages_latch() {
        let mut c = abc();
        assert_eq!(c.go_to(2), Ok(Some(2)));
        assert_eq!(*c.current_item(), "C");
        assert!(c.is_transitioning());

        // Same index again: no-op, not an error.
        assert_eq!(c.go_to(2), Ok(None));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn go_to_current_index_is_noop_when_idle() {
        let mut c = abc();
        assert_eq!(c.go_to(0), Ok(None));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn go_to_ignored_while_settling() {
        let mut c = abc();
        c.next();
        assert_eq!(c.go_to(2), Ok(None));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn go_to_out_of_range_signals_invalid_index() {
        let mut c = abc();
        assert_eq!(c.go_to(3), Err(CarouselError::InvalidIndex { index: 3, len: 3 }));
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_transitioning());

        c.next();
        assert_eq!(
            c.go_to(usize::MAX),
            Err(CarouselError::InvalidIndex { index: usize::MAX, len: 3 })
        );
        assert_eq!(c.current_index(), 1);
        assert!(c.is_transitioning());
    }

    #[test]
    fn tick_ignores_latch() {
        let mut c = abc();
        c.next();
        assert_eq!(c.tick(), 2);
        assert_eq!(c.tick(), 0);
        // The latch from `next` is left as it was.
        assert!(c.is_transitioning());
    }

    #[test]
    fn unguarded_changes_settle_immediately() {
        let mut c = Carousel::auto_advancing(vec!["x", "y"]).unwrap();
        assert_eq!(c.next(), Some(1));
        assert!(!c.is_transitioning());
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.go_to(1), Ok(Some(1)));
    }

    #[test]
    fn settle_releases_without_time() {
        let mut c = abc();
        c.next();
        c.settle();
        assert_eq!(c.next(), Some(2));
    }

    #[test]
    fn random_operation_storms_keep_index_valid() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..50 {
            let n = rng.random_range(1..8usize);
            let mut c = Carousel::new((0..n).collect::<Vec<_>>(), D).unwrap();
            for _ in 0..200 {
                let before = c.current_index();
                let was_settling = c.is_transitioning();
                match rng.random_range(0..5) {
                    0 => {
                        c.next();
                    }
                    1 => {
                        c.previous();
                    }
                    2 => {
                        let target = rng.random_range(0..n + 2);
                        let result = c.go_to(target);
                        if target >= n {
                            assert!(result.is_err());
                            assert_eq!(c.current_index(), before);
                        }
                    }
                    3 => c.update(Duration::from_millis(rng.random_range(0..400))),
                    _ => {
                        c.tick();
                    }
                }
                assert!(c.current_index() < n);
                assert_eq!(*c.current_item(), c.current_index());
                if was_settling && c.is_transitioning() && c.current_index() != before {
                    // Only an unguarded tick may move the index while settling.
                    assert_eq!(c.current_index(), (before + 1) % n);
                }
            }
        }
    }
}
