//! Trees planted over time
//!
//! Fetches the public tree-planting records once and shows them as a D3.js
//! line chart, with "From"/"To" pickers narrowing the displayed window.
//!
//! Data flow:
//! 1. On mount: fetch the trees payload, sort it by creation time and set the
//!    window to the first and last planting days.
//! 2. On window change: filter the loaded records (never the previously
//!    filtered ones) and re-render via D3.js.
//! 3. On failure: log, show an empty chart with a one-line error.

use dioxus::prelude::*;
use trees_chart_ui::components::{ChartContainer, DateRangePicker, ErrorDisplay, LoadingSpinner};
use trees_chart_ui::fetch::HttpTreeSource;
use trees_chart_ui::js_bridge;
use trees_chart_ui::state::AppState;
use trees_core::loader;
use trees_core::series::{self, LineChartConfig};
use trees_core::store::ScopeToken;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "trees-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let scope = use_hook(ScopeToken::new);

    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    // ─── Effect 1: Load once on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        state.store.write().begin_load();

        let scope = scope.clone();
        spawn(async move {
            let outcome = loader::load(&HttpTreeSource::default()).await;
            // The signal is dropped along with the view.
            if let Ok(mut store) = state.store.try_write() {
                store.finish_load_if_live(&scope, outcome);
            }
        });
    });

    // ─── Effect 2: Filter by the window and render chart ───
    // Re-runs whenever the store changes (load outcome or either boundary).
    use_effect(move || {
        let store = state.store.read();
        if store.is_loading() {
            return;
        }
        let points = series::chart_points(&store.visible());
        log::debug!(
            "Rendering {} of {} trees",
            points.len(),
            store.records().len()
        );
        js_bridge::render_line_chart(CHART_CONTAINER_ID, &points, &LineChartConfig::default());
    });

    // ─── Render ───
    let loading = state.store.read().is_loading();
    let error = state.store.read().last_error().map(ToString::to_string);

    rsx! {
        div {
            class: "App",
            style: "margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if loading {
                LoadingSpinner {}
            } else {
                if let Some(err) = error {
                    ErrorDisplay { message: err }
                }

                DateRangePicker {}

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: LineChartConfig::default().height,
                }
            }
        }
    }
}
