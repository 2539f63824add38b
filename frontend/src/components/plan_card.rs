use yew::prelude::*;

use crate::quote::{compute_quote, format_ghs, QuoteRequest};

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub title: AttrValue,
    pub blurb: AttrValue,
    /// Sample request the "from" price is computed for.
    pub request: QuoteRequest,
    pub perks: Vec<String>,
    #[prop_or_default]
    pub popular: bool,
}

/// Starting price of a plan, straight from the quote engine.
pub fn plan_price(request: &QuoteRequest) -> i64 {
    compute_quote(request).total
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let href = format!("/quote?service={}", props.request.service_type.value());

    html! {
        <div class={classes!("pricing-card", props.popular.then(|| "popular"))}>
            if props.popular {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <div class="card-header">
                <h3>{&props.title}</h3>
                <p class="hint">{&props.blurb}</p>
                <div class="price">
                    <span class="period">{"from "}</span>
                    <span class="amount">{format_ghs(plan_price(&props.request))}</span>
                </div>
            </div>
            <ul>
                { for props.perks.iter().map(|perk| html! { <li>{format!("✓ {}", perk)}</li> }) }
            </ul>
            <a class="btn btn-outline" href={href}>{"Get Quote"}</a>
        </div>
    }
}
