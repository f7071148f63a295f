//! Town Zoning Lookup
//!
//! Single-page front end for `/api/zoning`: type a city, get a link to its zoning
//! ordinance, then confirm or reject the document.
//!
//! Data flow:
//! 1. `SearchForm` feeds keystrokes to the `LookupController` held in `AppState`.
//! 2. On submit the controller issues a ticket and a task POSTs the query.
//! 3. The response is folded back into the controller; stale tickets are dropped.
//! 4. `ResultRegion` renders whatever the controller's view says.

use dioxus::prelude::*;
use tzl_ui::components::{ResultRegion, SearchForm, SiteHeader};
use tzl_ui::js_bridge;
use tzl_ui::state::AppState;
use tzl_ui::SITE_HEADER_ID;

/// Quiet period before the header threshold is remeasured after a resize.
const RESIZE_DEBOUNCE_MS: u32 = 150;

const APP_CSS: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; color: #1f2933; background: #f5f7fa; }
.site-header { position: sticky; top: 0; z-index: 10; padding: 24px 16px; background: #ffffff; text-align: center; transition: padding 0.2s, box-shadow 0.2s; }
.site-header h1 { margin: 0; font-size: 28px; }
.site-header .tagline { margin: 4px 0 0 0; color: #616e7c; }
.site-header.scrolled { padding: 8px 16px; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.12); }
.site-header.scrolled .tagline { display: none; }
.container { max-width: 800px; margin: 0 auto; padding: 16px; }
.search-form { display: flex; flex-wrap: wrap; gap: 8px; align-items: center; margin-bottom: 16px; }
.search-form label { width: 100%; font-weight: bold; }
.search-form input { flex: 1; min-width: 220px; padding: 10px; border: 1px solid #cbd2d9; border-radius: 4px; }
.btn { padding: 10px 16px; border: none; border-radius: 4px; cursor: pointer; color: #ffffff; }
.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: #2196F3; }
.btn-secondary { background: #616e7c; }
.btn-success { background: #2e7d32; }
.btn-error { background: #c62828; }
.result-card { padding: 16px; margin: 8px 0; background: #ffffff; border-radius: 4px; border-left: 4px solid #2196F3; }
.result-card.error { border-left-color: #c62828; background: #ffebee; }
.result-card.success { border-left-color: #2e7d32; }
.status-indicator { font-weight: bold; }
.status-indicator.success { color: #2e7d32; }
.status-indicator.error { color: #c62828; }
.result-item { margin-top: 8px; }
.result-label { font-size: 12px; color: #616e7c; }
.result-link { word-break: break-all; }
.pdf-preview { padding: 16px; margin: 8px 0; background: #ffffff; border-radius: 4px; }
.pdf-actions { display: flex; flex-wrap: wrap; gap: 8px; }
.mt-4 { margin-top: 16px; }
.spinner { display: inline-block; width: 12px; height: 12px; margin-right: 6px; border: 2px solid currentColor; border-right-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("zoning-lookup-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    // Header exists once the first render has been committed
    use_effect(move || {
        if let Err(e) = js_bridge::install_sticky_header(SITE_HEADER_ID, RESIZE_DEBOUNCE_MS) {
            log::warn!("Sticky header disabled: {:?}", e);
        }
    });

    rsx! {
        style { {APP_CSS} }
        SiteHeader {}
        main {
            class: "container",
            SearchForm {}
            ResultRegion {}
        }
    }
}
