use yew::prelude::*;
use yew_router::prelude::*;

use crate::quote::composer::TERMS;
use crate::quote::{compute_quote, format_ghs, AddOn, Frequency, PropertyType, QuoteRequest, ServiceType};
use crate::Route;

/// Starting price shown on the pricing page: a one-time clean of a 1 bed, 1 bath home.
fn from_price(service: ServiceType) -> i64 {
    let request = QuoteRequest::new(service, PropertyType::Home, 1, 1).with_frequency(Frequency::OneTime);
    compute_quote(&request).total
}

fn percent_label(rate: f64) -> String {
    format!("{}%", (rate * 100.0).round() as i64)
}

fn multiplier_label(multiplier: f64) -> String {
    let delta = ((multiplier - 1.0) * 100.0).round() as i64;
    match delta {
        0 => "Standard rate".to_string(),
        d if d > 0 => format!("+{}%", d),
        d => format!("{}%", d),
    }
}

fn plan_card(service: ServiceType, popular: bool) -> Html {
    html! {
        <div class={classes!("pricing-card", popular.then(|| "popular"))}>
            if popular {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <div class="card-header">
                <h3>{service.label()}</h3>
                <div class="price">
                    <span class="period">{"from "}</span>
                    <span class="amount">{format_ghs(from_price(service))}</span>
                </div>
            </div>
            <a class="btn btn-outline" href={format!("/quote?service={}", service.value())}>
                {"Price my space"}
            </a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-container">
            <style>
                {r#"
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .rate-table { width: 100%; border-collapse: collapse; }
                    .rate-table td { padding: 0.5rem 0; border-bottom: 1px solid #eef1f0; }
                    .rate-table td:last-child { text-align: right; }
                "#}
            </style>

            <section class="pricing-header page-header">
                <h1>{"Transparent, Premium Pricing"}</h1>
                <p>{"No surprises. Starting prices below are for a one-time clean of a 1 bedroom, 1 bathroom home. Your exact quote is itemized on the quote page."}</p>
            </section>

            <section class="section">
                <h2>{"Residential Cleaning Plans"}</h2>
                <div class="pricing-grid">
                    { plan_card(ServiceType::StandardHomeCare, false) }
                    { plan_card(ServiceType::DeepRefresh, true) }
                    { plan_card(ServiceType::MoveInOut, false) }
                </div>
            </section>

            <section class="section alt">
                <h2>{"Turnover & Short-Stay Pricing"}</h2>
                <div class="pricing-grid">
                    { plan_card(ServiceType::Turnover, true) }
                    { plan_card(ServiceType::GuestReadyPresentation, false) }
                    { plan_card(ServiceType::RoutinePropertyCare, false) }
                </div>
            </section>

            <section class="section">
                <div class="card-grid three">
                    <div class="card">
                        <h3>{"Add-ons"}</h3>
                        <table class="rate-table">
                            { for AddOn::ALL.iter().map(|add_on| html! {
                                <tr>
                                    <td>{add_on.label()}</td>
                                    <td>{format!("+{}", format_ghs(add_on.fee()))}</td>
                                </tr>
                            }) }
                        </table>
                    </div>
                    <div class="card">
                        <h3>{"Recurring discounts"}</h3>
                        <table class="rate-table">
                            { for Frequency::ALL.iter().filter(|f| f.discount_rate() > 0.0).map(|f| html! {
                                <tr>
                                    <td>{f.label()}</td>
                                    <td>{format!("-{}", percent_label(f.discount_rate()))}</td>
                                </tr>
                            }) }
                        </table>
                    </div>
                    <div class="card">
                        <h3>{"Property type"}</h3>
                        <table class="rate-table">
                            { for PropertyType::ALL.iter().map(|p| html! {
                                <tr>
                                    <td>{p.label()}</td>
                                    <td>{multiplier_label(p.multiplier())}</td>
                                </tr>
                            }) }
                        </table>
                    </div>
                </div>
                <p class="hint">{"Totals are rounded to the nearest GHS 5."}</p>
            </section>

            <section class="section">
                <h2>{"Terms"}</h2>
                <ul>
                    { for TERMS.iter().map(|term| html! { <li>{*term}</li> }) }
                </ul>
            </section>

            <section class="section cta">
                <h2>{"Ready for Premium Cleaning?"}</h2>
                <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Get your exact quote"}</Link<Route>>
            </section>
        </div>
    }
}
