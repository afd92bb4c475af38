//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a load failure as a single muted line above the (empty) chart.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 8px 12px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; font-size: 12px;",
            "Could not load trees: {props.message}"
        }
    }
}
