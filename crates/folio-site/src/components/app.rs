//! Root application component.

use dioxus::prelude::*;
use folio_ui::SplashGate;

use crate::site_config::SiteConfig;

use super::{Footer, Navbar, PageSection};

/// Root application component.
///
/// The page is rendered beneath the splash from the start so it is ready
/// the moment the splash reports completion.
#[component]
pub fn App(site: SiteConfig, #[props(default)] skip_splash: bool) -> Element {
    rsx! {
        div {
            class: "site-root",

            SplashGate {
                config: site.splash.clone(),
                brand: site.brand.clone(),
                role: site.role.clone(),
                skip: skip_splash,

                div {
                    class: "site",

                    Navbar { brand: site.brand.clone(), sections: site.sections.clone() }

                    main {
                        class: "site-main",
                        for section in site.sections.iter() {
                            PageSection { key: "{section.id}", section: section.clone() }
                        }
                    }

                    Footer { brand: site.brand.clone(), tagline: site.tagline.clone() }
                }
            }
        }
    }
}
