//! Error types for Folio

use thiserror::Error;

/// Errors raised while validating a splash configuration
///
/// A running sequencer has no failure modes of its own; everything that can
/// go wrong is caught here before the first frame is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplashError {
    #[error("Splash duration must be greater than zero")]
    ZeroDuration,

    #[error("Splash needs at least one phrase")]
    NoPhrases,

    #[error("Frame rate must be greater than zero")]
    ZeroFrameRate,

    #[error("Phrase interval must be greater than zero")]
    ZeroPhraseInterval,

    #[error("Exit delay ({exit_ms} ms) must be shorter than completion delay ({complete_ms} ms)")]
    ExitNotBeforeCompletion { exit_ms: u64, complete_ms: u64 },
}

/// Result type for splash operations
pub type SplashResult<T> = Result<T, SplashError>;
