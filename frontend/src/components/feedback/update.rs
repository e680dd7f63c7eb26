//! Update function for the feedback form component.
//!
//! Elm-style: receives the component, the `Context` and a `Msg`, mutates the
//! form model and returns whether the view should re-render. The only side
//! effect started here is the single HTTP request of an accepted submit.

use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::{SubmitBlocked, SubmitOutcome};

use super::helpers::{current_source, post_feedback, show_toast};
use super::messages::Msg;
use super::state::FeedbackFormComponent;

pub fn update(
    component: &mut FeedbackFormComponent,
    ctx: &Context<FeedbackFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Input(input) => component.form.input(input),
        Msg::Submit => match component.form.begin_submit(current_source()) {
            Ok(payload) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = post_feedback(payload).await;
                    link.send_message(Msg::Resolved(outcome));
                });
                true
            }
            Err(SubmitBlocked::Invalid(count)) => {
                log!(format!("Feedback not sent: {}", SubmitBlocked::Invalid(count)));
                true
            }
            Err(blocked) => {
                warn!(format!("Ignored submit: {}", blocked));
                false
            }
        },
        Msg::Resolved(outcome) => {
            if let SubmitOutcome::TransportFailed(cause) = &outcome {
                error!(format!("Backend connection failed: {}", cause));
            }
            match component.form.finish_submit(outcome) {
                Some(notice) if notice.is_failure() => {
                    show_toast(&notice.to_string());
                    true
                }
                Some(notice) => {
                    log!(notice.to_string());
                    true
                }
                None => false,
            }
        }
        Msg::SubmitAnother => component.form.reset(),
    }
}
