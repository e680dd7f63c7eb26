//! Browser-facing helpers for the feedback form: reading the page's `source`
//! tag, talking to the feedback endpoint, and toast notifications.

use common::form::source::resolve_source;
use common::form::SubmitOutcome;
use common::requests::FeedbackPayload;
use common::responses::SubmitResponse;
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, UrlSearchParams};

const FEEDBACK_PATH: &str = "/api/feedback";

/// A request without an answer after this long counts as a transport failure.
const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Reads `?source=` from the current page URL, or the default source tag.
pub fn current_source() -> String {
    let param = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("source"));
    resolve_source(param.as_deref())
}

/// Posts one payload and reports how the exchange ended.
///
/// Never retries. A body that is not a `SubmitResponse` is reported as a
/// rejection, a failed or timed out request as a transport failure.
pub async fn post_feedback(payload: FeedbackPayload) -> SubmitOutcome {
    let request = match Request::post(FEEDBACK_PATH).json(&payload) {
        Ok(request) => request,
        Err(err) => return SubmitOutcome::TransportFailed(err.to_string()),
    };

    let exchange = async move {
        let response = request.send().await?;
        let status = response.status();
        let body = response.json::<SubmitResponse>().await.ok();
        Ok::<_, gloo_net::Error>(SubmitOutcome::from_response(status, body))
    };

    match select(Box::pin(exchange), Box::pin(TimeoutFuture::new(SUBMIT_TIMEOUT_MS))).await {
        Either::Left((Ok(outcome), _)) => outcome,
        Either::Left((Err(err), _)) => SubmitOutcome::TransportFailed(err.to_string()),
        Either::Right(_) => {
            SubmitOutcome::TransportFailed(format!("no answer after {} ms", SUBMIT_TIMEOUT_MS))
        }
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The message is inserted as text, never as HTML, since it may echo a
/// server-provided error.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");
                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
