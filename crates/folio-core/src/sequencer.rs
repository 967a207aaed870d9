//! The splash sequencer.
//!
//! One tokio task per sequencer multiplexes the phrase timer, the frame
//! source, both exit deadlines and a cancellation token. State lives only on
//! that task; observers read [`SplashSnapshot`]s from a watch channel.
//!
//! Every handler runs under a liveness lock shared with the handle. Disposal
//! takes that lock, clears the flag and drops the completion callback, then
//! cancels the token and aborts the task. A handler therefore either finishes
//! before [`SplashHandle::dispose`] returns or never touches state at all.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::instrument::WithSubscriber;
use tracing::{debug, info, Instrument};

use crate::config::SplashConfig;
use crate::error::SplashResult;
use crate::frames::{FrameSource, IntervalFrames};
use crate::phase::PhaseCycler;
use crate::progress::{FrameOutcome, ProgressDriver, ProgressStage};

/// Callback invoked once when the sequence completes.
///
/// It runs on the sequencer task while the liveness lock is held, so it must
/// not dispose the sequencer that invokes it.
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// State shared between the handle and the task.
struct Liveness {
    alive: bool,
    on_complete: Option<CompletionCallback>,
}

type SharedLiveness = Arc<Mutex<Liveness>>;

fn lock(liveness: &Mutex<Liveness>) -> MutexGuard<'_, Liveness> {
    // A panicking callback must not wedge dispose
    liveness.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Visual state published to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashSnapshot {
    /// Index of the phrase currently shown
    pub phrase_index: usize,
    /// Progress percentage in `[0, 100]`
    pub progress: f64,
    /// Whether the splash has started fading out
    pub exiting: bool,
    /// Stage of the progress state machine
    pub stage: ProgressStage,
}

impl Default for SplashSnapshot {
    fn default() -> Self {
        Self {
            phrase_index: 0,
            progress: 0.0,
            exiting: false,
            stage: ProgressStage::Running,
        }
    }
}

impl SplashSnapshot {
    /// Progress rounded to a whole percent for display.
    pub fn percent_label(&self) -> u32 {
        self.progress.round().clamp(0.0, 100.0) as u32
    }

    /// Whether completion has been signalled.
    pub fn is_complete(&self) -> bool {
        self.stage == ProgressStage::Completed
    }

    /// Whether the splash should still be rendered.
    pub fn is_visible(&self) -> bool {
        !self.is_complete()
    }
}

/// How a wait on [`SplashHandle::completed`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The sequence ran to the end.
    Finished,
    /// The sequencer was disposed first.
    Disposed,
}

/// Builder for a splash run.
pub struct SplashSequencer<F: FrameSource = IntervalFrames> {
    config: SplashConfig,
    frames: F,
    on_complete: Option<CompletionCallback>,
}

impl SplashSequencer<IntervalFrames> {
    /// Validates `config` and prepares a sequencer driven at its frame rate.
    pub fn new(config: SplashConfig) -> SplashResult<Self> {
        config.validate()?;
        let frames = IntervalFrames::with_rate(config.frame_rate_hz);
        Ok(Self {
            config,
            frames,
            on_complete: None,
        })
    }
}

impl<F: FrameSource> SplashSequencer<F> {
    /// Replaces the frame source.
    pub fn with_frames<G: FrameSource>(self, frames: G) -> SplashSequencer<G> {
        SplashSequencer {
            config: self.config,
            frames,
            on_complete: self.on_complete,
        }
    }

    /// Sets the callback invoked exactly once on completion.
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    /// Starts the sequence on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(self) -> SplashHandle {
        let (snapshot_tx, snapshot_rx) = watch::channel(SplashSnapshot::default());
        let liveness = Arc::new(Mutex::new(Liveness {
            alive: true,
            on_complete: self.on_complete,
        }));
        let cancel = CancellationToken::new();
        let phrases: Arc<[String]> = self.config.phrases.clone().into();

        let runner = Runner {
            cycler: PhaseCycler::new(self.config.phrases.len()),
            driver: ProgressDriver::new(self.config.duration(), Instant::now()),
            config: self.config,
            frames: self.frames,
            snapshots: snapshot_tx,
            liveness: Arc::clone(&liveness),
            cancel: cancel.clone(),
        };

        let task = tokio::spawn(
            runner
                .run()
                .instrument(tracing::info_span!("splash"))
                .with_current_subscriber(),
        );

        SplashHandle {
            snapshots: snapshot_rx,
            phrases,
            liveness,
            cancel,
            task,
        }
    }
}

/// Owning handle to a running splash sequence.
///
/// Dropping the handle disposes the sequence.
pub struct SplashHandle {
    snapshots: watch::Receiver<SplashSnapshot>,
    phrases: Arc<[String]>,
    liveness: SharedLiveness,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SplashHandle {
    /// Returns the latest published state.
    pub fn snapshot(&self) -> SplashSnapshot {
        *self.snapshots.borrow()
    }

    /// Returns a receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<SplashSnapshot> {
        self.snapshots.clone()
    }

    /// Returns the phrase list in display order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Returns the phrase currently shown.
    pub fn current_phrase(&self) -> &str {
        let index = self.snapshot().phrase_index.min(self.phrases.len().saturating_sub(1));
        self.phrases.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        !lock(&self.liveness).alive
    }

    /// Waits until the sequence finishes or is disposed.
    ///
    /// Safe to call repeatedly and from several places at once.
    pub async fn completed(&self) -> Completion {
        wait_for_completion(self.subscribe()).await
    }

    /// Cancels every pending timer and frame. Calling it again is a no-op.
    ///
    /// Blocks while a handler is mid-flight; once this returns no snapshot
    /// changes and the completion callback never runs.
    pub fn dispose(&self) {
        let callback = {
            let mut live = lock(&self.liveness);
            if !live.alive {
                return;
            }
            live.alive = false;
            live.on_complete.take()
        };
        drop(callback);
        self.cancel.cancel();
        self.task.abort();

        let snapshot = self.snapshot();
        if snapshot.is_complete() {
            debug!("Splash sequencer released after completion");
        } else {
            info!(
                progress = snapshot.progress,
                stage = snapshot.stage.as_str(),
                "Splash sequencer disposed before completion"
            );
        }
    }
}

impl Drop for SplashHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for SplashHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplashHandle")
            .field("snapshot", &self.snapshot())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Waits on a snapshot receiver until the sequence finishes or its task ends.
pub async fn wait_for_completion(mut rx: watch::Receiver<SplashSnapshot>) -> Completion {
    match rx.wait_for(SplashSnapshot::is_complete).await {
        Ok(_) => Completion::Finished,
        Err(_) => Completion::Disposed,
    }
}

/// Task-side state. Owned by the spawned task and dropped with it.
struct Runner<F: FrameSource> {
    config: SplashConfig,
    frames: F,
    cycler: PhaseCycler,
    driver: ProgressDriver,
    snapshots: watch::Sender<SplashSnapshot>,
    liveness: SharedLiveness,
    cancel: CancellationToken,
}

impl<F: FrameSource> Runner<F> {
    async fn run(mut self) {
        let start = self.driver.start();
        let period = self.config.phrase_interval();
        let mut phrase_timer = tokio::time::interval_at(start + period, period);
        phrase_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut exit_at: Option<Instant> = None;
        let mut complete_at: Option<Instant> = None;
        let mut frames_open = true;

        info!(
            duration_ms = self.config.duration_ms,
            phrases = self.cycler.len(),
            phrase_interval_ms = period.as_millis() as u64,
            "Splash sequence started"
        );

        loop {
            let stage = self.driver.stage();

            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => {
                    debug!("Splash task cancelled");
                    return;
                }

                _ = sleep_until(complete_at.unwrap_or(start)),
                    if complete_at.is_some() && stage == ProgressStage::Exiting => {
                    self.finish();
                    return;
                }

                _ = sleep_until(exit_at.unwrap_or(start)),
                    if exit_at.is_some() && stage == ProgressStage::ReachedFull => {
                    self.begin_exit();
                }

                _ = phrase_timer.tick(), if !self.cycler.is_finished() => {
                    self.advance_phrase();
                }

                frame = self.frames.next_frame(),
                    if frames_open && stage == ProgressStage::Running => {
                    match frame {
                        Some(now) => {
                            if let Some(full_at) = self.on_frame(now) {
                                exit_at = Some(full_at + self.config.exit_delay());
                                complete_at = Some(full_at + self.config.complete_delay());
                            }
                        }
                        None => {
                            debug!("Frame source closed, progress frozen");
                            frames_open = false;
                        }
                    }
                }
            }
        }
    }

    /// Runs `f` under the liveness lock, or not at all once disposed.
    fn while_alive<R>(&mut self, f: impl FnOnce(&mut Self, &mut Liveness) -> R) -> Option<R> {
        let liveness = Arc::clone(&self.liveness);
        let mut live = lock(&liveness);
        if !live.alive || self.cancel.is_cancelled() {
            return None;
        }
        Some(f(self, &mut live))
    }

    fn publish(&self) {
        self.snapshots.send_replace(SplashSnapshot {
            phrase_index: self.cycler.current(),
            progress: self.driver.progress(),
            exiting: self.driver.is_exiting(),
            stage: self.driver.stage(),
        });
    }

    fn advance_phrase(&mut self) {
        self.while_alive(|runner, _| {
            if let Some(index) = runner.cycler.advance() {
                debug!(phrase_index = index, "Phrase advanced");
                runner.publish();
            }
        });
    }

    /// Feeds one frame; returns the instant progress hit 100, if it did now.
    fn on_frame(&mut self, now: Instant) -> Option<Instant> {
        self.while_alive(|runner, _| match runner.driver.on_frame(now) {
            FrameOutcome::Advanced(_) => {
                runner.publish();
                None
            }
            FrameOutcome::ReachedFull(at) => {
                debug!("Progress reached 100%");
                runner.publish();
                Some(at)
            }
            FrameOutcome::Idle => None,
        })
        .flatten()
    }

    fn begin_exit(&mut self) {
        self.while_alive(|runner, _| {
            if runner.driver.begin_exit() {
                debug!("Splash exit started");
                runner.publish();
            }
        });
    }

    fn finish(&mut self) {
        self.while_alive(|runner, live| {
            if !runner.driver.complete() {
                return;
            }
            runner.publish();
            info!("Splash sequence completed");

            if let Some(callback) = live.on_complete.take() {
                callback();
            }
        });
    }
}
