use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::carousel::Carousel;
use crate::content::Portfolio;
use crate::driver::{CarouselDriver, Snapshot};
use crate::input::Input;

/// Tally of one headless session, returned when the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub slider: Snapshot,
    pub moved: usize,
    pub ignored: usize,
    pub rejected: usize,
    pub taglines_shown: usize,
}

/// Runs the experience slider against commands read from stdin.
///
/// The tagline carousel auto-advances alongside and every change of either
/// carousel is logged.
pub async fn run(
    portfolio: Portfolio,
    settle_delay: Duration,
    tick_period: Duration,
) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let session = run_with(reader, portfolio, settle_delay, tick_period).await?;
    info!(?session, "headless session ended");
    Ok(())
}

/// Same as [`run`] over any line source. Ends on `quit` or end of input.
pub async fn run_with<R>(
    reader: R,
    portfolio: Portfolio,
    settle_delay: Duration,
    tick_period: Duration,
) -> anyhow::Result<Session>
where
    R: AsyncBufRead + Unpin,
{
    let slider = CarouselDriver::spawn(
        Carousel::new(portfolio.experiences.clone(), settle_delay)?,
        None,
    );
    let taglines = CarouselDriver::spawn(
        Carousel::auto_advancing(portfolio.taglines.clone())?,
        Some(tick_period),
    );
    let mut tagline_updates = taglines.subscribe();
    let mut lines = reader.lines();
    let mut session = Session {
        slider: slider.snapshot(),
        moved: 0,
        ignored: 0,
        rejected: 0,
        taglines_shown: 0,
    };

    info!(
        experiences = portfolio.experiences.len(),
        "headless slider ready: next, prev, goto <n>, quit"
    );
    log_experience(&portfolio, 0);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read commands")? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let Some(input) = Input::parse(&line) else {
                    warn!(line = %line.trim(), "unknown command");
                    session.rejected += 1;
                    continue;
                };
                let result = match input {
                    Input::Next => slider.next().await,
                    Input::Previous => slider.previous().await,
                    Input::GoTo(index) => slider.go_to(index).await,
                    Input::Quit => break,
                };
                match result {
                    Ok(Some(index)) => {
                        session.moved += 1;
                        log_experience(&portfolio, index);
                    }
                    Ok(None) => {
                        session.ignored += 1;
                        info!(snapshot = ?slider.snapshot(), "ignored");
                    }
                    Err(e) => {
                        session.rejected += 1;
                        warn!(error = %e, "command rejected");
                    }
                }
            }
            changed = tagline_updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let index = tagline_updates.borrow_and_update().current_index;
                session.taglines_shown += 1;
                info!(tagline = %portfolio.taglines[index], "tagline");
            }
        }
    }

    session.slider = slider.snapshot();
    slider.shutdown().await;
    taglines.shutdown().await;
    Ok(session)
}

fn log_experience(portfolio: &Portfolio, index: usize) {
    let experience = &portfolio.experiences[index];
    info!(
        index,
        company = %experience.company,
        title = %experience.title,
        subtitle = %experience.subtitle,
        duration = %experience.duration,
        "experience"
    );
}
