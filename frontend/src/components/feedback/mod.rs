//! Feedback form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and helpers.
//!
//! All decisions about validation and about when a request may be sent are
//! made by `common::form::FeedbackForm`; this component only renders it,
//! forwards user events to it and performs the HTTP exchange it asks for.

use yew::prelude::*;

mod helpers;
mod messages;
mod star_rating;
mod state;
mod update;
mod view;

use messages::Msg;
pub use state::FeedbackFormComponent;

impl Component for FeedbackFormComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        FeedbackFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
