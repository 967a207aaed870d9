//! Shared UI components for Folio.
//!
//! Provides the progress bar, the splash screen that renders a running
//! sequencer, and the gate that keeps page content hidden until the splash
//! completes.

pub mod progress_bar;
pub mod splash_screen;
pub mod splash_gate;

pub use progress_bar::{ProgressBar, progress_fill_style};
pub use splash_screen::{SplashScreen, splash_class};
pub use splash_gate::{SplashGate, page_class};

/// Shared CSS containing the palette tokens and splash styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
