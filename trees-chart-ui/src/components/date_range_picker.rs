//! "From date" / "To date" pickers bound to the store's display window.

use crate::state::AppState;
use dioxus::prelude::*;
use trees_core::dates;

/// Two native date inputs. Each change moves one boundary; the chart is
/// re-derived from the loaded records, so either boundary can move freely.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = dates::format_picker(&state.store.read().range_start());
    let end = dates::format_picker(&state.store.read().range_end());

    let on_start_change = move |evt: Event<FormData>| {
        let value = evt.value();
        match dates::parse_picker(&value) {
            Some(date) => state.store.write().set_range_start(date),
            None => log::warn!("Ignoring unparseable start date {:?}", value),
        }
    };

    let on_end_change = move |evt: Event<FormData>| {
        let value = evt.value();
        match dates::parse_picker(&value) {
            Some(date) => state.store.write().set_range_end(date),
            None => log::warn!("Ignoring unparseable end date {:?}", value),
        }
    };

    rsx! {
        div {
            p { "From date:" }
            input {
                r#type: "date",
                value: "{start}",
                onchange: on_start_change,
            }
            p { "To date:" }
            input {
                r#type: "date",
                value: "{end}",
                onchange: on_end_change,
            }
        }
    }
}
