//! Loading splash screen driven by a [`SplashSequencer`].
//!
//! The component owns its sequencer: it is spawned on first render,
//! disposed when the component unmounts, and its snapshots are pumped into
//! a signal for rendering. Completion is forwarded to `on_complete` once.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{SplashConfig, SplashHandle, SplashSequencer, SplashSnapshot};

use crate::progress_bar::ProgressBar;

const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-left", "bottom-right"];

/// Animation delays of the five bouncing dots.
const DOT_DELAYS_MS: [u32; 5] = [0, 150, 300, 450, 600];

/// CSS class for the splash root at a given snapshot.
pub fn splash_class(snapshot: &SplashSnapshot) -> &'static str {
    if snapshot.exiting {
        "splash splash--exiting"
    } else {
        "splash"
    }
}

/// Full-screen loading splash.
///
/// Renders nothing once the sequence has completed. An invalid config is
/// logged and treated as an immediately finished splash.
#[component]
pub fn SplashScreen(
    config: SplashConfig,
    brand: String,
    role: String,
    on_complete: EventHandler<()>,
) -> Element {
    let snapshot = use_signal(SplashSnapshot::default);

    let handle: Option<Rc<SplashHandle>> = use_hook(|| match SplashSequencer::new(config.clone()) {
        Ok(sequencer) => Some(Rc::new(sequencer.spawn())),
        Err(e) => {
            tracing::error!(error = %e, "Invalid splash configuration, skipping splash");
            None
        }
    });

    // Release every pending timer on unmount
    let drop_handle = handle.clone();
    use_drop(move || {
        if let Some(handle) = drop_handle {
            handle.dispose();
        }
    });

    let pump_handle = handle.clone();
    use_future(move || {
        let handle = pump_handle.clone();
        async move {
            let mut snapshot = snapshot;
            let Some(handle) = handle else {
                on_complete.call(());
                return;
            };

            let mut rx = handle.subscribe();
            loop {
                let current = *rx.borrow_and_update();
                snapshot.set(current);
                if current.is_complete() {
                    on_complete.call(());
                    break;
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let current = snapshot();
    if handle.is_none() || !current.is_visible() {
        return rsx! {};
    }

    let phrase = config
        .phrases
        .get(current.phrase_index)
        .cloned()
        .unwrap_or_default();

    rsx! {
        div {
            class: "{splash_class(&current)}",
            "data-stage": "{current.stage.as_str()}",
            "aria-busy": "true",

            // Background
            div { class: "splash-orb splash-orb-primary" }
            div { class: "splash-orb splash-orb-secondary" }
            div { class: "splash-grid" }
            for corner in CORNERS {
                div { key: "{corner}", class: "splash-corner splash-corner-{corner}" }
            }

            div {
                class: "splash-body",

                div {
                    class: "splash-logo",
                    div { class: "splash-logo-tile", "👨‍💻" }
                    div { class: "splash-logo-ring" }
                }

                div {
                    class: "splash-heading",
                    h1 {
                        class: "splash-brand",
                        "{brand}"
                        span { class: "splash-brand-dot", "." }
                    }
                    p { class: "splash-role", "{role}" }
                }

                div {
                    class: "splash-phrase-slot",
                    "aria-live": "polite",
                    p { class: "splash-phrase", "{phrase}" }
                }

                div {
                    class: "splash-progress",
                    ProgressBar {
                        value: current.progress,
                        percent: current.percent_label(),
                        label: "Loading portfolio...",
                    }
                }

                div {
                    class: "splash-dots",
                    for delay in DOT_DELAYS_MS {
                        span {
                            key: "{delay}",
                            class: "splash-dot",
                            style: "animation-delay: {delay}ms",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ProgressStage;

    #[test]
    fn test_splash_class_follows_exiting() {
        let mut snapshot = SplashSnapshot::default();
        assert_eq!(splash_class(&snapshot), "splash");

        snapshot.exiting = true;
        snapshot.stage = ProgressStage::Exiting;
        assert_eq!(splash_class(&snapshot), "splash splash--exiting");
    }
}
