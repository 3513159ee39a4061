//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js`, are embedded at compile time,
//! and are evaluated as globals once D3 has loaded. Rust owns all data
//! shaping (sorting, paging, filtering, tooltip text); the JS side only draws
//! the JSON it is handed.

use wasm_bindgen::JsValue;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Global functions promoted to `window.*` after the scripts are evaluated.
const EXPORTED_FUNCTIONS: &[&str] = &[
    "renderBarChart",
    "renderDataTable",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('cost-insights JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        // only reachable on a syntax error in `code`
        web_sys::console::warn_2(&JsValue::from_str("cost-insights JS eval failed:"), &err);
    }
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
pub fn escape_js_arg(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "")
}

fn promote_exports_js() -> String {
    EXPORTED_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope through an indirect `eval` once
/// `d3` exists, then each exported function is promoted to `window.*`. Safe
/// to call more than once; later calls are ignored.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, DATA_TABLE_JS].join("\n");
    let store_js = format!(
        "if (!window.__costChartsReady) {{ window.__costChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__costChartsReady || window.__costChartsLoading) return;
            window.__costChartsLoading = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__costChartScripts);
                    delete window.__costChartScripts;
                    {promote}
                    window.__costChartsReady = true;
                    console.log('cost-insights charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        promote = promote_exports_js(),
    );
    call_js(&init_js);
}

/// Poll until the charts are initialized and `container_id` exists, then
/// call `window.<function>(container_id, data, config)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let data = escape_js_arg(data_json);
    let config = escape_js_arg(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__costChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{data}', '{config}');
                    }} catch(e) {{ console.error('[cost-insights] {function} error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Render grouped previous/current bars with precomputed tooltips.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("js_bridge: render_bar_chart into #{}", container_id);
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a data table from preformatted rows.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("js_bridge: render_data_table into #{}", container_id);
    render_when_ready("renderDataTable", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_js_arg() {
        let json = r#"{"name":"bob's \"db\"","note":"a\nb"}"#;
        let escaped = escape_js_arg(json);
        assert!(!escaped.contains('\n'));
        assert!(escaped.contains(r"bob\'s"));
        assert!(escaped.contains(r#"\\"db\\""#));
    }

    #[test]
    fn test_promote_exports_covers_renderers() {
        let js = promote_exports_js();
        assert!(js.contains("window.renderBarChart = renderBarChart;"));
        assert!(js.contains("window.renderDataTable = renderDataTable;"));
    }

    #[test]
    fn test_bar_bands_keyed_by_position() {
        // duplicate resource names must not share a band
        assert!(BAR_CHART_JS.contains("data.map(function(d, i) { return i; })"));
        assert!(BAR_CHART_JS.contains("x0(i)"));
        assert!(!BAR_CHART_JS.contains("x0(d.label)"));
    }
}
