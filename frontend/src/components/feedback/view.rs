//! View rendering for the feedback form component.
//!
//! Two screens: the form itself while `Editing`/`Submitting`, and a
//! thank-you panel with a "submit another" button once `Submitted`.

use super::messages::Msg;
use super::star_rating::StarRating;
use super::state::FeedbackFormComponent;
use common::form::display::{rating_caption, CommentsLength, COMMENTS_SOFT_LIMIT};
use common::form::{FeedbackForm, Field, FieldInput, FormPhase};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &FeedbackFormComponent, ctx: &Context<FeedbackFormComponent>) -> Html {
    let link = ctx.link();
    match component.form.phase() {
        FormPhase::Submitted => build_thank_you(link),
        FormPhase::Editing | FormPhase::Submitting => build_form(&component.form, link),
    }
}

fn build_thank_you(link: &Scope<FeedbackFormComponent>) -> Html {
    html! {
        <div class="card thank-you">
            <h2>{"Thank You!"}</h2>
            <p>{"Your feedback has been submitted successfully."}</p>
            <button class="primary" onclick={link.callback(|_| Msg::SubmitAnother)}>
                {"Submit Another Feedback"}
            </button>
        </div>
    }
}

fn build_form(form: &FeedbackForm, link: &Scope<FeedbackFormComponent>) -> Html {
    let submitting = form.is_submitting();
    let submission = form.submission();

    html! {
        <form
            class="card feedback-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <h1>{"Share Your Feedback"}</h1>

            <label for="name">{"Your Name"}</label>
            <input
                id="name"
                type="text"
                class={input_class(form, Field::Name)}
                value={submission.name.clone()}
                disabled={submitting}
                oninput={link.callback(|e: InputEvent| {
                    Msg::Input(FieldInput::Name(e.target_unchecked_into::<HtmlInputElement>().value()))
                })}
            />
            { field_error(form, Field::Name) }

            <label for="email">{"Email Address"}</label>
            <input
                id="email"
                type="text"
                inputmode="email"
                class={input_class(form, Field::Email)}
                value={submission.email.clone()}
                disabled={submitting}
                oninput={link.callback(|e: InputEvent| {
                    Msg::Input(FieldInput::Email(e.target_unchecked_into::<HtmlInputElement>().value()))
                })}
            />
            { field_error(form, Field::Email) }

            <label>{"Overall Rating"}</label>
            <StarRating
                rating={submission.rating}
                disabled={submitting}
                on_change={link.callback(|star: u8| Msg::Input(FieldInput::Rating(star)))}
            />
            <div class="rating-caption">
                { rating_caption(submission.rating).unwrap_or("Click the stars to rate!") }
            </div>
            { field_error(form, Field::Rating) }

            <label for="comments">{"Comments"}</label>
            <textarea
                id="comments"
                rows="5"
                class={input_class(form, Field::Comments)}
                value={submission.comments.clone()}
                disabled={submitting}
                oninput={link.callback(|e: InputEvent| {
                    Msg::Input(FieldInput::Comments(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
                })}
            />
            <div class="comments-footer">
                { field_error(form, Field::Comments) }
                <span class={CommentsLength::of(&submission.comments).css_class()}>
                    { format!("{}/{} characters", submission.comments.chars().count(), COMMENTS_SOFT_LIMIT) }
                </span>
            </div>

            <button type="submit" class="primary" disabled={submitting}>
                { if submitting { "Submitting your feedback..." } else { "Submit Feedback" } }
            </button>
        </form>
    }
}

fn input_class(form: &FeedbackForm, field: Field) -> Classes {
    classes!("field", form.errors().get(field).map(|_| "invalid"))
}

fn field_error(form: &FeedbackForm, field: Field) -> Html {
    match form.errors().get(field) {
        Some(error) => html! {
            <p class="field-error" id={format!("{}-error", field.as_str())}>{ error.to_string() }</p>
        },
        None => html! {},
    }
}
