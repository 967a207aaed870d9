//! Keeps page content hidden and inert until the splash completes.

use dioxus::prelude::*;
use folio_core::SplashConfig;

use crate::splash_screen::SplashScreen;

/// CSS class for the gated page content.
pub fn page_class(revealed: bool) -> &'static str {
    if revealed {
        "page page--revealed"
    } else {
        "page page--hidden"
    }
}

/// Renders the splash over `children` and reveals them on completion.
///
/// With `skip` set the splash never mounts and content is shown at once.
#[component]
pub fn SplashGate(
    config: SplashConfig,
    brand: String,
    role: String,
    #[props(default)] skip: bool,
    children: Element,
) -> Element {
    let mut revealed = use_signal(|| skip);

    rsx! {
        if !skip {
            SplashScreen {
                config,
                brand,
                role,
                on_complete: move |_| {
                    if !revealed() {
                        tracing::info!("Splash complete, revealing page");
                        revealed.set(true);
                    }
                },
            }
        }
        div {
            class: "{page_class(revealed())}",
            "aria-hidden": if revealed() { "false" } else { "true" },
            {children}
        }
    }
}
