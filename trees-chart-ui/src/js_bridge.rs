//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart data and calls those globals.

use trees_core::series::{ChartPoint, LineChartConfig};

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Trees JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts once D3 has loaded. Call once at app startup.
///
/// The scripts are evaluated at global scope via indirect eval inside the
/// polling callback, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS].join("\n");

    let store_js = format!("window.__treesChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__treesChartScripts);
                    delete window.__treesChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__treesChartsReady = true;
                    console.log('Trees charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the trees line chart into `container_id`.
///
/// Polls until D3.js, the chart scripts and the container element are all
/// available, then renders. Re-rendering replaces the previous chart.
pub fn render_line_chart(container_id: &str, points: &[ChartPoint], config: &LineChartConfig) {
    let data_json = match serde_json::to_string(points) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart points: {}", e);
            return;
        }
    };
    let config_json = match serde_json::to_string(config) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart config: {}", e);
            return;
        }
    };
    let id = js_string(container_id);
    let data = js_string(&data_json);
    let config = js_string(&config_json);

    call_js(&format!(
        r#"
        (function() {{
            if (window.__treesChartPoll) clearInterval(window.__treesChartPoll);
            window.__treesChartPoll = setInterval(function() {{
                if (window.__treesChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(window.__treesChartPoll);
                    window.__treesChartPoll = null;
                    try {{
                        window.renderLineChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Trees] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
