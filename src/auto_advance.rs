use std::time::Duration;

/// Frame-driven periodic ticker. Dropping it stops the ticks.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period: Duration,
    elapsed: Duration,
    paused: bool,
}

impl AutoAdvance {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Accumulates `dt` and returns how many periods completed.
    pub fn update(&mut self, dt: Duration) -> u32 {
        if self.paused || self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            due += 1;
        }
        due
    }
}
