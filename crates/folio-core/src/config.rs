//! Configuration for the splash sequencer

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SplashError, SplashResult};

/// Phrases shown while the page loads
pub const DEFAULT_PHRASES: [&str; 4] = [
    "Hello There 👋",
    "Welcome To My World 🌍",
    "I Build Things For The Web 💻",
    "Hope You Enjoy The Visit ✨",
];

/// Timing and content of the splash sequence
///
/// All fields have defaults, so a partial TOML table is enough:
///
/// ```toml
/// [splash]
/// duration_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Time for progress to travel from 0 to 100
    pub duration_ms: u64,

    /// Cadence of phrase advances; `None` spreads phrases evenly over the duration
    pub phrase_interval_ms: Option<u64>,

    /// Delay from reaching 100% until the splash starts fading out
    pub exit_delay_ms: u64,

    /// Delay from reaching 100% until completion is signalled
    pub complete_delay_ms: u64,

    /// Frame rate of the default frame source
    pub frame_rate_hz: u32,

    /// Ordered phrases cycled through while loading
    pub phrases: Vec<String>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_ms: 8000,
            phrase_interval_ms: None,
            exit_delay_ms: 300,
            complete_delay_ms: 1000,
            frame_rate_hz: 60,
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl SplashConfig {
    /// Create a config with the given duration and default everything else
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration_ms: duration.as_millis() as u64,
            ..Default::default()
        }
    }

    /// Replace the phrase list
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exit and completion delays
    pub fn with_exit_delays(mut self, exit: Duration, complete: Duration) -> Self {
        self.exit_delay_ms = exit.as_millis() as u64;
        self.complete_delay_ms = complete.as_millis() as u64;
        self
    }

    /// Override the phrase cadence
    pub fn with_phrase_interval(mut self, interval: Duration) -> Self {
        self.phrase_interval_ms = Some(interval.as_millis() as u64);
        self
    }

    /// Check the invariants the sequencer relies on
    pub fn validate(&self) -> SplashResult<()> {
        if self.duration_ms == 0 {
            return Err(SplashError::ZeroDuration);
        }
        if self.phrases.is_empty() {
            return Err(SplashError::NoPhrases);
        }
        if self.frame_rate_hz == 0 {
            return Err(SplashError::ZeroFrameRate);
        }
        if self.phrase_interval_ms == Some(0) {
            return Err(SplashError::ZeroPhraseInterval);
        }
        if self.exit_delay_ms >= self.complete_delay_ms {
            return Err(SplashError::ExitNotBeforeCompletion {
                exit_ms: self.exit_delay_ms,
                complete_ms: self.complete_delay_ms,
            });
        }
        Ok(())
    }

    /// Time for progress to reach 100
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Time between phrase advances
    ///
    /// Defaults to `duration / phrases`, floored at one millisecond so the
    /// interval timer always has a non-zero period.
    pub fn phrase_interval(&self) -> Duration {
        let interval = match self.phrase_interval_ms {
            Some(ms) => Duration::from_millis(ms),
            None => self.duration() / self.phrases.len().max(1) as u32,
        };
        interval.max(Duration::from_millis(1))
    }

    /// Delay from full progress to the fade-out
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Delay from full progress to completion
    pub fn complete_delay(&self) -> Duration {
        Duration::from_millis(self.complete_delay_ms)
    }

    /// Period of one frame at the configured rate
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate_hz.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SplashConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phrases.len(), 4);
        assert_eq!(config.phrase_interval(), Duration::from_millis(2000));
    }

    #[test]
    fn test_phrase_interval_spreads_over_duration() {
        let config = SplashConfig::with_duration(Duration::from_millis(2000));
        assert_eq!(config.phrase_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_phrase_interval_override() {
        let config = SplashConfig::default().with_phrase_interval(Duration::from_millis(1800));
        assert_eq!(config.phrase_interval(), Duration::from_millis(1800));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let config = SplashConfig {
            duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SplashError::ZeroDuration));
    }

    #[test]
    fn test_rejects_empty_phrases() {
        let config = SplashConfig::default().with_phrases(Vec::<String>::new());
        assert_eq!(config.validate(), Err(SplashError::NoPhrases));
    }

    #[test]
    fn test_rejects_exit_after_completion() {
        let config = SplashConfig::default()
            .with_exit_delays(Duration::from_millis(1200), Duration::from_millis(400));
        assert_eq!(
            config.validate(),
            Err(SplashError::ExitNotBeforeCompletion {
                exit_ms: 1200,
                complete_ms: 400
            })
        );
    }

    #[test]
    fn test_frame_period() {
        let config = SplashConfig::default();
        assert_eq!(config.frame_period(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SplashConfig = toml::from_str(
            r#"
            duration_ms = 4000
            phrase_interval_ms = 1800
            "#,
        )
        .unwrap();
        assert_eq!(config.duration(), Duration::from_millis(4000));
        assert_eq!(config.phrase_interval(), Duration::from_millis(1800));
        assert_eq!(config.exit_delay(), Duration::from_millis(300));
        assert_eq!(config.phrases.len(), 4);
    }
}
