use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{BUSINESS, WHATSAPP_GREETING};
use crate::whatsapp::build_whatsapp_url;
use crate::Route;

struct Step {
    number: &'static str,
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "1",
        title: "Tell us about your space",
        body: "Pick a service, your property type and room count. Your quote updates as you type.",
    },
    Step {
        number: "2",
        title: "Send it on WhatsApp",
        body: "Your quote, breakdown and terms go straight into a WhatsApp message. Tap send and attach photos if you like.",
    },
    Step {
        number: "3",
        title: "We confirm and clean",
        body: "We reply to confirm the date and time, then arrive ready to work. Anything beyond the quote is agreed first.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let whatsapp_href = build_whatsapp_url(BUSINESS.whatsapp_number, WHATSAPP_GREETING);

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"A spotless space, without the back-and-forth"}</h1>
                <p class="hero-sub">
                    {"Premium cleaning for homes, apartments, hotels and short-stays across Kumasi. Get an instant, itemized quote and book in one WhatsApp message."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Quote} classes="btn btn-primary">
                        {"Get an instant quote"}
                    </Link<Route>>
                    <a class="btn btn-outline" href={whatsapp_href} target="_blank" rel="noopener noreferrer">
                        {"Message on WhatsApp"}
                    </a>
                </div>
            </section>

            <section class="section">
                <h2>{"How it works"}</h2>
                <div class="card-grid three">
                    { for STEPS.iter().map(|step| html! {
                        <div class="card step-card">
                            <span class="step-number">{step.number}</span>
                            <h3>{step.title}</h3>
                            <p>{step.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section alt">
                <h2>{"For homes and for hosts"}</h2>
                <div class="card-grid two">
                    <div class="card">
                        <h3>{"Homes & apartments"}</h3>
                        <p>{"Standard care on a schedule, deep refreshes when you need a reset, and move in / move out cleans that hand a place over properly."}</p>
                        <Link<Route> to={Route::ForHomes} classes="text-link">{"See home services →"}</Link<Route>>
                    </div>
                    <div class="card">
                        <h3>{"Airbnbs, hotels & guest houses"}</h3>
                        <p>{"Consistent turnovers between guests and a photo-ready, hotel-style finish when presentation matters most."}</p>
                        <Link<Route> to={Route::ForShortStays} classes="text-link">{"See short-stay services →"}</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section cta">
                <h2>{"Know the price before you book"}</h2>
                <p>{"No hidden fees. Your quote shows every line, and we confirm any extra scope with you before we start."}</p>
                <Link<Route> to={Route::Pricing} classes="btn btn-outline">{"View pricing"}</Link<Route>>
            </section>
        </div>
    }
}
