//! Async owner of a carousel for event-driven hosts.
//!
//! The spawned task is the only place the carousel is mutated. Input sources
//! talk to it through [`CarouselDriver`], the rendering side follows the
//! published [`Snapshot`]s. Latch release is a one-shot deadline and
//! auto-advance an optional interval, both owned by the task, so aborting the
//! task on drop cancels them with it.

use std::future::pending;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at, sleep_until};
use tracing::{debug, info};

use crate::carousel::Carousel;
use crate::error::CarouselError;

/// What the rendering layer reads after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub current_index: usize,
    pub is_transitioning: bool,
    pub len: usize,
}

impl Snapshot {
    pub fn of<T>(carousel: &Carousel<T>) -> Self {
        Self {
            current_index: carousel.current_index(),
            is_transitioning: carousel.is_transitioning(),
            len: carousel.len(),
        }
    }
}

type Reply = oneshot::Sender<Result<Option<usize>, CarouselError>>;

enum Command {
    Next { reply: Reply },
    Previous { reply: Reply },
    GoTo { target: usize, reply: Reply },
    Shutdown,
}

#[derive(Debug)]
pub struct CarouselDriver {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    task: Option<JoinHandle<()>>,
}

impl CarouselDriver {
    /// Spawns the owning task on the current tokio runtime.
    ///
    /// With `auto_advance` set, the carousel also ticks once per period.
    pub fn spawn<T: Send + 'static>(carousel: Carousel<T>, auto_advance: Option<Duration>) -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(Snapshot::of(&carousel));
        let task = tokio::spawn(run(carousel, receiver, publisher, auto_advance));
        Self {
            commands,
            snapshots,
            task: Some(task),
        }
    }

    pub async fn next(&self) -> Result<Option<usize>, CarouselError> {
        self.request(|reply| Command::Next { reply }).await
    }

    pub async fn previous(&self) -> Result<Option<usize>, CarouselError> {
        self.request(|reply| Command::Previous { reply }).await
    }

    pub async fn go_to(&self, target: usize) -> Result<Option<usize>, CarouselError> {
        self.request(|reply| Command::GoTo { target, reply }).await
    }

    /// Latest published state.
    pub fn snapshot(&self) -> Snapshot {
        *self.snapshots.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Stops the task after it drains the commands already queued.
    pub async fn shutdown(mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    async fn request(
        &self,
        command: impl FnOnce(Reply) -> Command,
    ) -> Result<Option<usize>, CarouselError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .map_err(|_| CarouselError::Closed)?;
        response.await.map_err(|_| CarouselError::Closed)?
    }
}

impl Drop for CarouselDriver {
    fn drop(&mut self) {
        // A pending latch release or tick must not outlive the handle.
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run<T>(
    mut carousel: Carousel<T>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<Snapshot>,
    auto_advance: Option<Duration>,
) {
    let mut ticker = auto_advance.filter(|period| !period.is_zero()).map(|period| {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });
    // A carousel handed over mid-transition keeps its remaining settle time.
    let mut settle_at = carousel
        .settle_remaining()
        .map(|remaining| Instant::now() + remaining);

    info!(len = carousel.len(), auto_advance = ?auto_advance, "carousel driver started");

    loop {
        let pending_reply = tokio::select! {
            biased;

            _ = wait_until(settle_at) => {
                carousel.settle();
                settle_at = None;
                None
            }
            _ = next_tick(&mut ticker) => {
                carousel.tick();
                None
            }
            command = commands.recv() => match command {
                Some(Command::Next { reply }) => Some((reply, Ok(carousel.next()))),
                Some(Command::Previous { reply }) => Some((reply, Ok(carousel.previous()))),
                Some(Command::GoTo { target, reply }) => Some((reply, carousel.go_to(target))),
                Some(Command::Shutdown) | None => break,
            },
        };

        if settle_at.is_none() {
            settle_at = carousel.settle_remaining().map(|remaining| Instant::now() + remaining);
        }

        publisher.send_replace(Snapshot::of(&carousel));

        if let Some((reply, result)) = pending_reply {
            let _ = reply.send(result);
        }
    }

    debug!(index = carousel.current_index(), "carousel driver stopped");
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => pending().await,
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const D: Duration = Duration::from_millis(300);

    fn abc() -> Carousel<&'static str> {
        Carousel::new(vec!["A", "B", "C"], D).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_next_then_wrap() {
        let driver = CarouselDriver::spawn(abc(), None);

        assert_eq!(driver.next().await, Ok(Some(1)));
        assert!(driver.snapshot().is_transitioning);
        assert_eq!(driver.next().await, Ok(None));
        assert_eq!(driver.snapshot().current_index, 1);

        sleep(D + Duration::from_millis(1)).await;
        assert!(!driver.snapshot().is_transitioning);
        assert_eq!(driver.next().await, Ok(Some(2)));

        sleep(D + Duration::from_millis(1)).await;
        assert_eq!(driver.next().await, Ok(Some(0)));
    }

    #[tokio::test(start_paused = true)]
    async fn latch_still_held_just_before_delay() {
        let driver = CarouselDriver::spawn(abc(), None);
        driver.previous().await.unwrap();
        sleep(D - Duration::from_millis(1)).await;
        assert!(driver.snapshot().is_transitioning);
        assert_eq!(driver.previous().await, Ok(None));
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_while_settling_releases_on_schedule() {
        let mut c = abc();
        c.next();
        c.update(Duration::from_millis(100));
        let driver = CarouselDriver::spawn(c, None);
        assert!(driver.snapshot().is_transitioning);

        // Only the 200 ms left on the latch remain.
        sleep(Duration::from_millis(199)).await;
        assert_eq!(driver.next().await, Ok(None));
        sleep(Duration::from_millis(2)).await;
        assert!(!driver.snapshot().is_transitioning);
        assert_eq!(driver.next().await, Ok(Some(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn go_to_same_index_and_out_of_range() {
        let driver = CarouselDriver::spawn(abc(), None);

        assert_eq!(driver.go_to(2).await, Ok(Some(2)));
        assert_eq!(driver.go_to(2).await, Ok(None));
        assert_eq!(
            driver.go_to(7).await,
            Err(CarouselError::InvalidIndex { index: 7, len: 3 })
        );
        assert_eq!(driver.snapshot().current_index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_ticks_through_latch() {
        let period = Duration::from_millis(2500);
        let driver = CarouselDriver::spawn(abc(), Some(period));

        sleep(period + Duration::from_millis(1)).await;
        assert_eq!(driver.snapshot().current_index, 1);

        // A held latch does not stop the timer.
        driver.next().await.unwrap();
        assert_eq!(driver.snapshot().current_index, 2);
        sleep(period).await;
        assert_eq!(driver.snapshot().current_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_every_change() {
        let driver = CarouselDriver::spawn(abc(), None);
        let mut updates = driver.subscribe();

        driver.next().await.unwrap();
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().current_index, 1);

        updates.changed().await.unwrap();
        assert!(!updates.borrow_and_update().is_transitioning);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let driver = CarouselDriver::spawn(abc(), Some(Duration::from_millis(10)));
        let mut updates = driver.subscribe();
        driver.next().await.unwrap();
        updates.borrow_and_update();

        drop(driver);
        sleep(Duration::from_secs(1)).await;
        assert!(updates.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_waits_for_task() {
        let driver = CarouselDriver::spawn(abc(), None);
        let updates = driver.subscribe();
        driver.shutdown().await;
        assert!(updates.has_changed().is_err());
    }
}
