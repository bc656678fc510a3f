//! Timer task driving staged reveals.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::domain::entities::{RevealStep, SlideEntry};

/// Default delay between two reveal steps.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(280);

/// Emits the reveal steps of one visit at a time.
///
/// Step `i` of a visit is sent `i × interval` after the entry was scheduled.
/// Scheduling a new entry aborts the task of the previous one before spawning
/// the next, so at most one sequence is live.
pub struct RevealScheduler {
    interval: Duration,
    step_tx: mpsc::UnboundedSender<RevealStep>,
    active: Option<JoinHandle<()>>,
}

impl RevealScheduler {
    #[must_use]
    pub const fn new(interval: Duration, step_tx: mpsc::UnboundedSender<RevealStep>) -> Self {
        Self {
            interval,
            step_tx,
            active: None,
        }
    }

    /// Cancels pending steps and schedules the steps of `entry`.
    pub fn schedule(&mut self, entry: SlideEntry) {
        self.cancel();

        if entry.revealable_count == 0 {
            return;
        }

        debug!(
            visit = %entry.visit,
            slide = entry.slide,
            steps = entry.revealable_count,
            "Scheduling staged reveal"
        );

        let interval = self.interval;
        let step_tx = self.step_tx.clone();
        let entered_at = Instant::now();

        self.active = Some(tokio::spawn(async move {
            for step in 0..entry.revealable_count {
                let offset = interval.saturating_mul(u32::try_from(step).unwrap_or(u32::MAX));
                sleep_until(entered_at + offset).await;

                let message = RevealStep {
                    visit: entry.visit,
                    slide: entry.slide,
                    step,
                };
                if step_tx.send(message).is_err() {
                    debug!("Reveal channel closed");
                    break;
                }
            }
        }));
    }

    /// Aborts the pending sequence, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.abort();
        }
    }

    /// Whether a sequence is still emitting steps.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::navigation::NavigationController;
    use crate::domain::entities::VisitToken;
    use tokio::sync::mpsc::error::TryRecvError;

    const D: Duration = DEFAULT_REVEAL_INTERVAL;

    fn entry(visit: u64, slide: usize, revealable_count: usize) -> SlideEntry {
        SlideEntry {
            visit: VisitToken::new(visit),
            slide,
            revealable_count,
        }
    }

    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(2),
            "expected ~{expected:?}, got {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_fire_in_order_at_fixed_offsets() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);
        let start = Instant::now();

        scheduler.schedule(entry(1, 4, 3));

        for expected in 0..3u32 {
            let step = rx.recv().await.expect("step");
            assert_eq!(step.step, expected as usize);
            assert_eq!(step.slide, 4);
            assert_elapsed(start, D * expected);
        }

        tokio::time::sleep(D * 4).await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
        assert!(!scheduler.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_items_schedules_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);

        scheduler.schedule(entry(1, 0, 0));
        tokio::time::sleep(D * 3).await;

        assert!(!scheduler.is_active());
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_cancels_previous_visit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);

        scheduler.schedule(entry(1, 2, 3));
        let first = rx.recv().await.expect("first step");
        assert_eq!(first.visit, VisitToken::new(1));

        scheduler.schedule(entry(2, 3, 0));
        tokio::time::sleep(D * 5).await;

        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_any_step() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);

        scheduler.schedule(entry(1, 0, 3));
        scheduler.cancel();
        tokio::time::sleep(D * 5).await;

        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_controller_timeline_follows_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);
        let mut nav = NavigationController::new(vec![0, 3]);

        let entered = nav.go_next().expect("moved");
        let start = Instant::now();
        scheduler.schedule(entered);
        assert_eq!(nav.reveal_cursor(1), None);

        let floor_at_now = || {
            let t = start.elapsed().as_millis();
            usize::try_from(t / D.as_millis()).expect("fits").min(2)
        };

        for expected in 0..3u32 {
            let step = rx.recv().await.expect("step");
            assert!(nav.apply_reveal_step(step));
            assert_eq!(nav.reveal_cursor(1), Some(expected as usize));
            assert_eq!(Some(floor_at_now()), nav.reveal_cursor(1));

            // Halfway to the next step nothing has moved yet.
            sleep_until(start + D * expected + D / 2).await;
            assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
            assert_eq!(nav.reveal_cursor(1), Some(expected as usize));
            assert_eq!(Some(floor_at_now()), nav.reveal_cursor(1));
        }

        tokio::time::sleep(D * 3).await;
        assert_eq!(nav.reveal_cursor(1), Some(2));
        assert!(nav.snapshot().fully_revealed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentry_midway_restarts_from_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);
        let mut nav = NavigationController::new(vec![0, 3, 0]);

        scheduler.schedule(nav.go_next().expect("enter slide 1"));
        let step = rx.recv().await.expect("step 0");
        assert!(nav.apply_reveal_step(step));
        tokio::time::sleep(D / 2).await;
        assert_eq!(nav.reveal_cursor(1), Some(0));

        scheduler.schedule(nav.go_next().expect("leave"));
        scheduler.schedule(nav.go_previous().expect("come back"));
        assert_eq!(nav.reveal_cursor(1), None);

        let mut seen = Vec::new();
        while seen.len() < 3 {
            let step = rx.recv().await.expect("step");
            if nav.apply_reveal_step(step) {
                seen.push(step.step);
            }
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_before_first_step_never_mutates() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RevealScheduler::new(D, tx);
        let mut nav = NavigationController::new(vec![0, 3, 0]);

        scheduler.schedule(nav.go_next().expect("enter slide 1"));
        scheduler.schedule(nav.go_next().expect("enter slide 2"));
        tokio::time::sleep(D * 5).await;

        while let Ok(step) = rx.try_recv() {
            assert!(!nav.apply_reveal_step(step));
        }
        assert_eq!(nav.reveal_cursor(1), None);
    }
}
