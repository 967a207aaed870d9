//! A single anchored page section.

use dioxus::prelude::*;

use crate::site_config::SectionConfig;

#[component]
pub fn PageSection(section: SectionConfig) -> Element {
    rsx! {
        section {
            id: "{section.id}",
            class: "page-section",

            div {
                class: "page-section-inner",

                if let Some(eyebrow) = &section.eyebrow {
                    p { class: "page-section-eyebrow", "{eyebrow}" }
                }

                h2 { class: "page-section-title", "{section.title}" }

                for (i, paragraph) in section.body.iter().enumerate() {
                    p { key: "{i}", class: "page-section-body", "{paragraph}" }
                }
            }
        }
    }
}
