use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::plan_card::PlanCard;
use crate::config::{BUSINESS, WHATSAPP_GREETING};
use crate::quote::{AddOn, AddOns, Frequency, PropertyType, QuoteRequest, ServiceType};
use crate::whatsapp::build_whatsapp_url;
use crate::Route;

const REASONS: [(&str, &str); 4] = [
    (
        "Guest Satisfaction",
        "Photo-ready finishes lead to happy guests and five-star reviews. We know what impresses travelers.",
    ),
    (
        "Fast Turnaround",
        "We get your property ready between guests quickly. No stress about back-to-back bookings.",
    ),
    (
        "Reliable & Trustworthy",
        "A background-checked, professional team you can trust with your property.",
    ),
    (
        "Consistency Matters",
        "Same team for recurring properties means consistency and familiarity with your space.",
    ),
];

const TURNOVER_STANDARD: [&str; 7] = [
    "Fresh linens & perfectly made beds (photo-ready finish)",
    "Bathrooms disinfected, polished, and restocked",
    "Kitchen reset: counters, sink, appliance exteriors, dining area wiped down",
    "High-touch points sanitized (handles, switches, remotes)",
    "Floors finished properly, edges included",
    "Trash removed, bins relined, and space fully refreshed",
    "Final inspection walkthrough before lock-up",
];

const FAQS: [(&str, &str); 5] = [
    (
        "What turnaround time can you offer?",
        "A standard turnover takes 2-3 hours. Tell us about back-to-back bookings in your notes and we'll plan around them.",
    ),
    (
        "Can you handle linens?",
        "Yes. Add laundry (wash & fold) to your quote and we'll take care of linens and towels.",
    ),
    (
        "What if there's damage or excessive mess?",
        "We message you right away. Standard cleaning covers normal use; anything beyond it is agreed on WhatsApp before any extra charge.",
    ),
    (
        "Do you offer recurring rates for hosts?",
        "Yes. Routine property care on a weekly, bi-weekly or monthly schedule is discounted, and you keep the same team.",
    ),
    (
        "How do I schedule turnover cleanings?",
        "Send us your quote on WhatsApp with your upcoming check-outs and we'll confirm each visit.",
    ),
];

/// A one-bedroom short-stay unit, the sample every host plan is priced for.
pub fn sample_unit(service: ServiceType, frequency: Frequency) -> QuoteRequest {
    QuoteRequest::new(service, PropertyType::Airbnb, 1, 1).with_frequency(frequency)
}

pub fn linen_turnover() -> QuoteRequest {
    sample_unit(ServiceType::Turnover, Frequency::TurnoverOnly)
        .with_add_ons(AddOns::default().with(AddOn::Laundry))
}

#[function_component(ForShortStays)]
pub fn for_short_stays() -> Html {
    let whatsapp_href = build_whatsapp_url(BUSINESS.whatsapp_number, WHATSAPP_GREETING);

    html! {
        <div class="audience-page">
            <section class="hero">
                <h1>{"Turn Guests into Five-Star Reviews"}</h1>
                <p class="hero-sub">
                    {"Fast, efficient, photo-ready turnovers that keep your guests happy and your property pristine. Perfect for Airbnbs, hotels, guest houses, and short-stay properties."}
                </p>
            </section>

            <section class="section">
                <h2>{format!("Why Hosts Choose {}", BUSINESS.name)}</h2>
                <div class="card-grid two">
                    { for REASONS.iter().map(|(title, body)| html! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section alt">
                <h2>{format!("The {} Turnover Standard", BUSINESS.name)}</h2>
                <p>{"Every turnover is a fresh start. Here's exactly what your guests experience."}</p>
                <ul class="checklist">
                    { for TURNOVER_STANDARD.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </section>

            <section class="section">
                <h2>{"Services for Short-Stay Properties"}</h2>
                <div class="card-grid three">
                    <div class="card">
                        <h3>{ServiceType::Turnover.label()}</h3>
                        <p>{"Complete guest-ready cleaning between check-outs and check-ins. Our bread and butter."}</p>
                    </div>
                    <div class="card">
                        <h3>{ServiceType::GuestReadyPresentation.label()}</h3>
                        <p>{"Beyond just clean. Linens arranged, amenities displayed and the space staged for guest photos."}</p>
                    </div>
                    <div class="card">
                        <h3>{ServiceType::RoutinePropertyCare.label()}</h3>
                        <p>{"Weekly, bi-weekly, or monthly maintenance to keep your property in peak condition between guests."}</p>
                    </div>
                </div>
            </section>

            <section class="section alt">
                <h2>{"Pricing Plans for Hosts"}</h2>
                <p class="hint">{"Prices shown for a 1 bedroom, 1 bathroom short-stay unit."}</p>
                <div class="card-grid three">
                    <PlanCard
                        title="As-Needed"
                        blurb="Perfect for occasional guests or seasonal properties."
                        request={sample_unit(ServiceType::Turnover, Frequency::TurnoverOnly)}
                        perks={vec!["Standard price per turnover".to_string(), "Flexible scheduling".to_string(), "No commitment".to_string()]}
                    />
                    <PlanCard
                        title="Turnover + Linens"
                        blurb="For properties with frequent check-outs."
                        request={linen_turnover()}
                        perks={vec!["Linens washed and folded".to_string(), "Beds made photo-ready".to_string(), "Priority scheduling".to_string()]}
                        popular={true}
                    />
                    <PlanCard
                        title="Routine Care"
                        blurb="Weekly upkeep for hotels and guest houses between bookings."
                        request={sample_unit(ServiceType::RoutinePropertyCare, Frequency::Weekly)}
                        perks={vec!["Weekly visits".to_string(), "Dedicated team".to_string(), "Recurring discount".to_string()]}
                    />
                </div>
                <p>{"Managing several units? Message us and we'll plan a schedule across them."}</p>
            </section>

            <section class="section">
                <h2>{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <FaqItem question={*question}>
                            <p>{*answer}</p>
                        </FaqItem>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{"Start Getting Five-Star Turnovers"}</h2>
                <p>{"Let us handle the cleaning. You focus on guests and bookings."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Request a Quote"}</Link<Route>>
                    <a class="btn btn-outline" href={whatsapp_href} target="_blank" rel="noopener noreferrer">
                        {"Message on WhatsApp"}
                    </a>
                </div>
            </section>
        </div>
    }
}
