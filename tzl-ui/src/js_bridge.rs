//! Typed wrappers around the browser APIs the lookup page needs.
//!
//! Everything here goes through `web_sys`; JS exceptions come back as `JsValue` and
//! are converted to [`LookupError`] at the fetch boundary so callers never see them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use tzl_core::config::ClientConfig;
use tzl_core::lookup::{interpret_response, LookupRequest};
use tzl_core::sticky_header::{HeaderTransition, StickyHeader, SCROLLED_CLASS};
use tzl_core::{LookupError, LookupResult, SearchQuery};
use tzl_utils::debounce::Debouncer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, HtmlElement, Request, RequestInit, Response, Window};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn html_element(id: &str) -> Result<HtmlElement, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

fn transport_error(value: JsValue) -> LookupError {
    LookupError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

async fn fetch_text(window: &Window, request: &Request) -> Result<(u16, String), JsValue> {
    let response: Response = JsFuture::from(window.fetch_with_request(request))
        .await?
        .dyn_into()?;
    let status = response.status();
    let text = JsFuture::from(response.text()?).await?;
    Ok((status, text.as_string().unwrap_or_default()))
}

/// POST a JSON body and return the status and raw response text.
///
/// The request is aborted after `timeout_ms`; that case comes back as
/// [`LookupError::Timeout`], every other failure as [`LookupError::Transport`].
pub async fn post_json(url: &str, body: &str, timeout_ms: u64) -> Result<(u16, String), LookupError> {
    let window = window().map_err(transport_error)?;
    let abort = AbortController::new().map_err(transport_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(&abort.signal()));
    let request = Request::new_with_str_and_init(url, &init).map_err(transport_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;

    let timed_out = Rc::new(Cell::new(false));
    let on_timeout = {
        let timed_out = timed_out.clone();
        Closure::<dyn FnMut()>::new(move || {
            timed_out.set(true);
            abort.abort();
        })
    };
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.as_ref().unchecked_ref(),
            timeout_ms.min(i32::MAX as u64) as i32,
        )
        .map_err(transport_error)?;

    let outcome = fetch_text(&window, &request).await;
    window.clear_timeout_with_handle(timer);
    drop(on_timeout);

    match outcome {
        Ok(response) => Ok(response),
        Err(_) if timed_out.get() => Err(LookupError::Timeout(timeout_ms)),
        Err(e) => Err(transport_error(e)),
    }
}

/// Send one lookup to the configured endpoint.
pub async fn submit_lookup(
    config: &ClientConfig,
    query: &SearchQuery,
) -> Result<LookupResult, LookupError> {
    let body = LookupRequest::new(query)
        .to_json()
        .map_err(|e| LookupError::Transport(e.to_string()))?;
    let (status, text) = post_json(&config.lookup_url(), &body, config.timeout_ms).await?;
    debug!("Lookup response {} for {}", status, query);
    interpret_response(status, &text)
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let opened = window().and_then(|w| w.open_with_url_and_target(url, "_blank"));
    if let Err(e) = opened {
        warn!("Could not open {}: {:?}", url, e);
    }
}

/// Move keyboard focus to an element.
pub fn focus_element(id: &str) {
    if let Err(e) = html_element(id).and_then(|el| el.focus()) {
        warn!("Could not focus #{}: {:?}", id, e);
    }
}

fn apply_transition(header: &HtmlElement, transition: HeaderTransition) -> Result<(), JsValue> {
    match transition {
        HeaderTransition::Scrolled => header.class_list().add_1(SCROLLED_CLASS),
        HeaderTransition::Unscrolled => header.class_list().remove_1(SCROLLED_CLASS),
    }
}

/// Toggle the `scrolled` class on the header when the page crosses half its height.
///
/// The threshold is recomputed `resize_wait_ms` after the last window resize.
/// Listeners live for the rest of the page.
pub fn install_sticky_header(header_id: &str, resize_wait_ms: u32) -> Result<(), JsValue> {
    let window = window()?;
    let header = html_element(header_id)?;
    let tracker = Rc::new(RefCell::new(StickyHeader::new(header.offset_height() as f64)));

    let on_scroll = {
        let window = window.clone();
        let header = header.clone();
        let tracker = tracker.clone();
        Closure::<dyn FnMut()>::new(move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let transition = tracker.borrow_mut().on_scroll(offset);
            if let Some(transition) = transition {
                if let Err(e) = apply_transition(&header, transition) {
                    warn!("Sticky header update failed: {:?}", e);
                }
            }
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    let debouncer = Rc::new(RefCell::new(Debouncer::new(resize_wait_ms)));
    let wait = resize_wait_ms.min(i32::MAX as u32) as i32;
    let on_resize = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let token = debouncer.borrow_mut().trigger();
            let debouncer = debouncer.clone();
            let header = header.clone();
            let tracker = tracker.clone();
            let remeasure = Closure::once_into_js(move || {
                if debouncer.borrow().is_current(token) {
                    tracker
                        .borrow_mut()
                        .set_header_height(header.offset_height() as f64);
                }
            });
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remeasure.unchecked_ref(),
                wait,
            ) {
                warn!("Could not schedule header remeasure: {:?}", e);
            }
        })
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    debug!("Sticky header installed on #{}", header_id);
    Ok(())
}
