use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// Selected rating, `0` when none is picked.
    pub rating: u8,
    pub on_change: Callback<u8>,
    #[prop_or_default]
    pub disabled: bool,
}

pub enum StarMsg {
    Hover(u8),
    Leave,
}

/// Five clickable stars. Hovering previews a rating without selecting it.
pub struct StarRating {
    hover: u8,
}

impl Component for StarRating {
    type Message = StarMsg;
    type Properties = StarRatingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { hover: 0 }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let hover = match msg {
            StarMsg::Hover(star) => star,
            StarMsg::Leave => 0,
        };
        let changed = self.hover != hover;
        self.hover = hover;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let lit = if self.hover > 0 { self.hover } else { props.rating };

        html! {
            <div class="star-rating">
                { for (1..=5u8).map(|star| {
                    let on_change = props.on_change.clone();
                    html! {
                        <button
                            type="button"
                            class={classes!("star", (star <= lit).then_some("lit"))}
                            aria-label={format!("Rate {} stars", star)}
                            disabled={props.disabled}
                            onclick={Callback::from(move |_: MouseEvent| on_change.emit(star))}
                            onmouseenter={ctx.link().callback(move |_: MouseEvent| StarMsg::Hover(star))}
                            onmouseleave={ctx.link().callback(|_: MouseEvent| StarMsg::Leave)}
                        >
                            {"★"}
                        </button>
                    }
                }) }
            </div>
        }
    }
}
