//! Loading progress bar with a percentage readout.

use dioxus::prelude::*;

/// Inline style for the fill element at `value` percent (clamped to 0-100).
pub fn progress_fill_style(value: f64) -> String {
    format!("width: {:.2}%", value.clamp(0.0, 100.0))
}

/// Labeled progress bar. `value` is a percentage; `percent` is the whole
/// number shown beside the label.
#[component]
pub fn ProgressBar(value: f64, percent: u32, label: String) -> Element {
    let fill_style = progress_fill_style(value);

    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
            div {
                class: "progress-track",
                div { class: "progress-fill", style: "{fill_style}" }
            }
            div {
                class: "progress-meta",
                span { class: "progress-label", "{label}" }
                span { class: "progress-value", "{percent}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_is_clamped() {
        assert_eq!(progress_fill_style(42.1234), "width: 42.12%");
        assert_eq!(progress_fill_style(-3.0), "width: 0.00%");
        assert_eq!(progress_fill_style(180.0), "width: 100.00%");
    }
}
