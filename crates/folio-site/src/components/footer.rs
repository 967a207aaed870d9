//! Page footer.

use dioxus::prelude::*;

#[component]
pub fn Footer(brand: String, tagline: String) -> Element {
    rsx! {
        footer {
            class: "footer",
            span { class: "footer-brand", "{brand}" }
            span { class: "footer-tagline", "{tagline}" }
        }
    }
}
