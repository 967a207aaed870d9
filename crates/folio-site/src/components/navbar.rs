//! Top navigation bar with section anchors and a collapsible mobile menu.

use dioxus::prelude::*;

use crate::site_config::SectionConfig;

/// CSS class for the mobile menu panel.
pub fn menu_class(open: bool) -> &'static str {
    if open {
        "navbar-menu navbar-menu--open"
    } else {
        "navbar-menu"
    }
}

#[component]
pub fn Navbar(brand: String, sections: Vec<SectionConfig>) -> Element {
    let mut menu_open = use_signal(|| false);
    let home_href = sections
        .first()
        .map(SectionConfig::href)
        .unwrap_or_else(|| "#".to_string());

    rsx! {
        header {
            class: "navbar",

            nav {
                class: "navbar-inner",

                a {
                    class: "navbar-brand",
                    href: "{home_href}",
                    "{brand}"
                    span { class: "navbar-brand-dot", "." }
                }

                button {
                    class: "navbar-toggle",
                    "aria-label": "Toggle menu",
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }

                ul {
                    class: "{menu_class(menu_open())}",
                    for section in sections.iter() {
                        li {
                            key: "{section.id}",
                            a {
                                class: "navbar-link",
                                href: "{section.href()}",
                                onclick: move |_| menu_open.set(false),
                                "{section.title}"
                            }
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

    #[test]
    fn test_menu_class() {
        assert_eq!(menu_class(false), "navbar-menu");
        assert_eq!(menu_class(true), "navbar-menu navbar-menu--open");
    }
}
