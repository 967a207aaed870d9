//! # Folio Core
//!
//! The splash sequencer behind the Folio portfolio page.
//!
//! A sequencer runs once per page load. It cycles through a short list of
//! phrases, drives a 0-100 progress value from elapsed time, and when full
//! fades out and signals completion so the host can reveal its content.
//!
//! ## Key Types
//!
//! - [`SplashSequencer`]: Validates configuration and spawns a run
//! - [`SplashHandle`]: Owning handle; exposes snapshots, completion and disposal
//! - [`SplashSnapshot`]: Visual state published on every change
//! - [`FrameSource`]: Frame cadence abstraction for testability
//! - [`PhaseCycler`] / [`ProgressDriver`]: The synchronous state machines
//!
//! ## Example
//!
//! ```ignore
//! use folio_core::{SplashConfig, SplashSequencer};
//!
//! let handle = SplashSequencer::new(SplashConfig::default())?
//!     .on_complete(|| tracing::info!("reveal page"))
//!     .spawn();
//!
//! handle.completed().await;
//! ```

pub mod config;
pub mod error;
pub mod frames;
pub mod phase;
pub mod progress;
pub mod sequencer;

pub use config::{SplashConfig, DEFAULT_PHRASES};
pub use error::{SplashError, SplashResult};
pub use frames::{FrameSource, FrameTrigger, IntervalFrames, ManualFrames};
pub use phase::PhaseCycler;
pub use progress::{progress_at, FrameOutcome, ProgressDriver, ProgressStage};
pub use sequencer::{
    wait_for_completion, Completion, CompletionCallback, SplashHandle, SplashSequencer,
    SplashSnapshot,
};
