use dioxus::prelude::*;

/// Loading indicator shown until the first load settles.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { "Loading..." }
    }
}
