//! Time-driven progress and the exit state machine.
//!
//! Progress is a pure function of elapsed wall-clock time, so the visible
//! rate does not depend on how often frames arrive. Once it reaches 100 the
//! driver walks `Running -> ReachedFull -> Exiting -> Completed` and never
//! moves backwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Upper bound of the progress percentage.
pub const FULL: f64 = 100.0;

/// Lifecycle stage of the progress driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProgressStage {
    /// Progress advancing on every frame.
    Running,
    /// Pinned at 100, exit timers pending.
    ReachedFull,
    /// Splash fading out, completion pending.
    Exiting,
    /// Completion signalled. Terminal.
    Completed,
}

impl ProgressStage {
    /// Returns a short label for logs and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStage::Running => "running",
            ProgressStage::ReachedFull => "reached-full",
            ProgressStage::Exiting => "exiting",
            ProgressStage::Completed => "completed",
        }
    }
}

/// Computes the progress percentage for `elapsed` out of `duration`.
///
/// Clamped to `[0, 100]`; a zero duration is immediately full.
pub fn progress_at(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return FULL;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64() * FULL).clamp(0.0, FULL)
}

/// Result of feeding one frame to the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Progress moved (or stayed) below 100; keep ticking.
    Advanced(f64),
    /// Progress hit 100 on this frame, at the given instant.
    ReachedFull(Instant),
    /// The driver is past `Running`; the frame was ignored.
    Idle,
}

/// Tracks progress and exit stages for one splash run.
#[derive(Debug, Clone)]
pub struct ProgressDriver {
    duration: Duration,
    start: Instant,
    progress: f64,
    stage: ProgressStage,
    full_at: Option<Instant>,
}

impl ProgressDriver {
    /// Creates a driver that started at `start`.
    pub fn new(duration: Duration, start: Instant) -> Self {
        Self {
            duration,
            start,
            progress: 0.0,
            stage: ProgressStage::Running,
            full_at: None,
        }
    }

    /// Current percentage in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current lifecycle stage.
    pub fn stage(&self) -> ProgressStage {
        self.stage
    }

    /// Instant the run started.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Instant at which progress first reached 100.
    pub fn full_at(&self) -> Option<Instant> {
        self.full_at
    }

    /// Whether the exit fade has begun.
    pub fn is_exiting(&self) -> bool {
        self.stage >= ProgressStage::Exiting
    }

    /// Updates progress from a frame timestamp.
    ///
    /// Timestamps earlier than a previous frame never lower the value.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        if self.stage != ProgressStage::Running {
            return FrameOutcome::Idle;
        }

        let elapsed = now.saturating_duration_since(self.start);
        self.progress = progress_at(elapsed, self.duration).max(self.progress);

        if self.progress >= FULL {
            self.progress = FULL;
            self.stage = ProgressStage::ReachedFull;
            self.full_at = Some(now);
            FrameOutcome::ReachedFull(now)
        } else {
            FrameOutcome::Advanced(self.progress)
        }
    }

    /// Moves `ReachedFull -> Exiting`. Returns false from any other stage.
    pub fn begin_exit(&mut self) -> bool {
        if self.stage != ProgressStage::ReachedFull {
            return false;
        }
        self.stage = ProgressStage::Exiting;
        true
    }

    /// Moves `Exiting -> Completed`. Returns false from any other stage.
    pub fn complete(&mut self) -> bool {
        if self.stage != ProgressStage::Exiting {
            return false;
        }
        self.stage = ProgressStage::Completed;
        true
    }
}
