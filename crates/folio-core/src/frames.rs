//! Frame scheduling abstraction.
//!
//! The progress driver advances once per display frame. Hosts plug in their
//! own cadence through [`FrameSource`]; the default is a fixed-rate tokio
//! interval, and [`ManualFrames`] lets callers push frame timestamps by hand.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// A stream of frame timestamps.
///
/// This trait allows tests to control exactly when frames arrive, enabling
/// deterministic testing of the progress loop.
pub trait FrameSource: Send + 'static {
    /// Waits for the next frame and returns its timestamp.
    ///
    /// Returns `None` when no more frames will ever arrive.
    fn next_frame(&mut self) -> impl Future<Output = Option<Instant>> + Send;
}

/// Fixed-rate frames backed by [`tokio::time::interval`].
///
/// Late frames are skipped rather than burst, like a display refresh.
#[derive(Debug)]
pub struct IntervalFrames {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalFrames {
    /// Creates a source ticking every `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            interval: None,
        }
    }

    /// Creates a source ticking `hz` times per second.
    pub fn with_rate(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }

    /// Time between frames.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameSource for IntervalFrames {
    async fn next_frame(&mut self) -> Option<Instant> {
        // Built lazily so the source can be constructed outside a runtime
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        Some(interval.tick().await)
    }
}

/// Frames delivered explicitly through a [`FrameTrigger`].
#[derive(Debug)]
pub struct ManualFrames {
    rx: mpsc::UnboundedReceiver<Instant>,
}

/// Sending half of [`ManualFrames`].
#[derive(Debug, Clone)]
pub struct FrameTrigger {
    tx: mpsc::UnboundedSender<Instant>,
}

impl ManualFrames {
    /// Creates a connected trigger and frame source.
    pub fn channel() -> (FrameTrigger, ManualFrames) {
        let (tx, rx) = mpsc::unbounded_channel();
        (FrameTrigger { tx }, ManualFrames { rx })
    }
}

impl FrameTrigger {
    /// Delivers a frame stamped `at`. Returns false if the source is gone.
    pub fn fire(&self, at: Instant) -> bool {
        self.tx.send(at).is_ok()
    }

    /// Delivers a frame stamped with the current time.
    pub fn fire_now(&self) -> bool {
        self.fire(Instant::now())
    }
}

impl FrameSource for ManualFrames {
    async fn next_frame(&mut self) -> Option<Instant> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_frames_follow_period() {
        let mut frames = IntervalFrames::new(Duration::from_millis(16));
        let first = frames.next_frame().await.unwrap();
        let second = frames.next_frame().await.unwrap();
        assert_eq!(second - first, Duration::from_millis(16));
    }

    #[test]
    fn test_with_rate() {
        let frames = IntervalFrames::with_rate(50);
        assert_eq!(frames.period(), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_manual_frames_deliver_in_order() {
        let (trigger, mut frames) = ManualFrames::channel();
        let base = Instant::now();
        assert!(trigger.fire(base));
        assert!(trigger.fire(base + Duration::from_millis(40)));
        drop(trigger);

        assert_eq!(frames.next_frame().await, Some(base));
        assert_eq!(frames.next_frame().await, Some(base + Duration::from_millis(40)));
        assert_eq!(frames.next_frame().await, None);
    }

    #[tokio::test]
    async fn test_trigger_reports_closed_source() {
        let (trigger, frames) = ManualFrames::channel();
        drop(frames);
        assert!(!trigger.fire_now());
    }
}
