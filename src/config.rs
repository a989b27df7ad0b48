use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{SETTLE_DELAY, TEXT_TICK_PERIOD};

/// Single-page portfolio with an experience slider.
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio", version, about)]
pub struct Args {
    /// Portfolio content as TOML; the built-in content is used when omitted
    #[arg(long, short)]
    pub content: Option<PathBuf>,

    /// Debounce window after each slide change, in milliseconds
    #[arg(long, default_value_t = SETTLE_DELAY.as_millis() as u64)]
    pub settle_ms: u64,

    /// Auto-advance period of the tagline carousel, in milliseconds
    #[arg(long, default_value_t = TEXT_TICK_PERIOD.as_millis() as u64)]
    pub tick_ms: u64,

    /// Drive the experience slider from stdin instead of opening a window
    #[arg(long)]
    pub headless: bool,
}

impl Args {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let args = Args::parse_from(["portfolio"]);
        assert_eq!(args.settle_delay(), SETTLE_DELAY);
        assert_eq!(args.tick_period(), TEXT_TICK_PERIOD);
        assert!(!args.headless);
        assert!(args.content.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "portfolio",
            "--settle-ms",
            "50",
            "--tick-ms",
            "0",
            "--headless",
            "-c",
            "me.toml",
        ]);
        assert_eq!(args.settle_delay(), Duration::from_millis(50));
        assert_eq!(args.tick_period(), Duration::ZERO);
        assert!(args.headless);
        assert_eq!(args.content, Some(PathBuf::from("me.toml")));
    }
}
