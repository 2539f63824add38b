use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::config::{BUSINESS, WHATSAPP_GREETING};
use crate::whatsapp::build_whatsapp_url;
use crate::Route;

const FAQS: [(&str, &str); 4] = [
    (
        "Do you service my area?",
        "We serve Kumasi and nearby areas. WhatsApp your location and we'll confirm coverage.",
    ),
    (
        "How far in advance should I book?",
        "For recurring service, one week's notice. One-time deep cleans, ideally 2-3 days. For urgent requests, just ask.",
    ),
    (
        "What if I'm not satisfied?",
        "If anything isn't right, tell us within 24 hours and we'll come back and fix it at no extra charge.",
    ),
    (
        "Can you work around my schedule?",
        "Yes. Pick a morning, afternoon or evening window on the quote form, or leave it flexible.",
    ),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let whatsapp_href = build_whatsapp_url(BUSINESS.whatsapp_number, WHATSAPP_GREETING);

    html! {
        <div class="contact-page">
            <section class="page-header">
                <h1>{"Get in Touch"}</h1>
                <p>{"Have questions? Want to schedule a cleaning? Reach out by phone or WhatsApp, or build your quote online."}</p>
            </section>

            <section class="section">
                <div class="card-grid three">
                    <div class="card">
                        <h3>{"WhatsApp"}</h3>
                        <p>{"Fast replies guaranteed."}</p>
                        <a class="btn btn-primary" href={whatsapp_href} target="_blank" rel="noopener noreferrer">
                            {"Chat on WhatsApp"}
                        </a>
                    </div>
                    <div class="card">
                        <h3>{"Call us"}</h3>
                        <p><a href={BUSINESS.phone_href}>{BUSINESS.phone_display}</a></p>
                        <p class="hint">{BUSINESS.hours}</p>
                    </div>
                    <div class="card">
                        <h3>{"Find us"}</h3>
                        <p>{BUSINESS.address}</p>
                        <p class="hint">{format!("Serving {}", BUSINESS.service_area)}</p>
                    </div>
                </div>
                <p>
                    {"Want a price first? "}
                    <Link<Route> to={Route::Quote} classes="text-link">{"Get an instant quote"}</Link<Route>>
                </p>
            </section>

            <section class="section alt">
                <h2>{"Common Questions"}</h2>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| html! {
                        <FaqItem question={*question} open={i == 0}>
                            <p>{*answer}</p>
                        </FaqItem>
                    }) }
                </div>
            </section>
        </div>
    }
}
