use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::plan_card::PlanCard;
use crate::config::{BUSINESS, WHATSAPP_GREETING};
use crate::quote::{Frequency, PropertyType, QuoteRequest, ServiceType};
use crate::whatsapp::build_whatsapp_url;
use crate::Route;

const BENEFITS: [(&str, &str); 4] = [
    (
        "Consistent Quality",
        "Same team, same standard every visit. We get to know your home and how you like it.",
    ),
    (
        "Your Time is Precious",
        "Flexible scheduling around your life. One-time deep cleans, weekly maintenance, or occasional touch-ups.",
    ),
    (
        "Total Trust",
        "Background-checked staff who respect your privacy. Your home is in good hands.",
    ),
    (
        "Attention to Detail",
        "We clean the corners you forget about. Every surface sparkles, every corner is cared for.",
    ),
];

const SERVICES: [(ServiceType, &str, &[&str]); 2] = [
    (
        ServiceType::StandardHomeCare,
        "Regular maintenance cleaning to keep your home fresh. Perfect for weekly or bi-weekly schedules.",
        &[
            "Floors (sweep & mop)",
            "Bathrooms (sanitized & sparkling)",
            "Kitchen (counters, sink, appliance exteriors)",
            "Dusting & surfaces",
            "Trash removal",
        ],
    ),
    (
        ServiceType::DeepRefresh,
        "A top-to-bottom reset for when you need everything extra clean. Great for seasonal deep cleans.",
        &[
            "Everything in Standard Home Care",
            "Baseboards & trim",
            "Light fixtures & ceiling fans",
            "Detailed corner & edge cleaning",
        ],
    ),
];

const FAQS: [(&str, &str); 5] = [
    (
        "How often should I schedule cleaning?",
        "It depends on your lifestyle. Most busy professionals prefer weekly or bi-weekly, and you can change the frequency any time.",
    ),
    (
        "Can you customize the service?",
        "Yes. Tell us what matters most in the notes on your quote, and add extras like fridge/oven or laundry.",
    ),
    (
        "Do you use eco-friendly products?",
        "We use professional-grade products that are safe for families and pets. Ask if you'd prefer eco-friendly options.",
    ),
    (
        "What if I'm not home during cleaning?",
        "No problem. Many clients leave us a key or access code. We confirm access details on WhatsApp before the visit.",
    ),
    (
        "How do I schedule?",
        "Fill out the quote form and send it on WhatsApp, or call us. We'll reply to confirm the date and time.",
    ),
];

/// The sample home every plan on this page is priced for.
pub fn sample_home(frequency: Frequency) -> QuoteRequest {
    QuoteRequest::new(ServiceType::StandardHomeCare, PropertyType::Home, 2, 1).with_frequency(frequency)
}

fn discount_perk(frequency: Frequency) -> String {
    let percent = (frequency.discount_rate() * 100.0).round() as i64;
    format!("{}% off every visit", percent)
}

#[function_component(ForHomes)]
pub fn for_homes() -> Html {
    let whatsapp_href = build_whatsapp_url(BUSINESS.whatsapp_number, WHATSAPP_GREETING);

    html! {
        <div class="audience-page">
            <section class="hero">
                <h1>{"Premium Home Cleaning for Busy Professionals"}</h1>
                <p class="hero-sub">
                    {"Your home should feel like a sanctuary. Let us handle the cleaning so you can focus on what matters. Hotel-level finish, every time."}
                </p>
            </section>

            <section class="section">
                <h2>{format!("Why Choose {} for Your Home?", BUSINESS.name)}</h2>
                <div class="card-grid two">
                    { for BENEFITS.iter().map(|(title, body)| html! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section alt">
                <h2>{"Services for Your Home"}</h2>
                <div class="card-grid two">
                    { for SERVICES.iter().map(|(service, blurb, includes)| html! {
                        <div class="card">
                            <h3>{service.label()}</h3>
                            <p>{*blurb}</p>
                            <ul>
                                { for includes.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <p>
                    {"Moving? "}
                    <a href={format!("/quote?service={}", ServiceType::MoveInOut.value())}>
                        {"Price a move in / move out clean"}
                    </a>
                </p>
            </section>

            <section class="section">
                <h2>{"Choose Your Plan"}</h2>
                <p class="hint">{"Prices shown for a 2 bedroom, 1 bathroom home."}</p>
                <div class="card-grid three">
                    <PlanCard
                        title="One-Time"
                        blurb="Perfect for a reset before guests, after a busy month, or just because."
                        request={sample_home(Frequency::OneTime)}
                        perks={vec!["Full clean as needed".to_string(), "Flexible scheduling".to_string(), "No commitment".to_string()]}
                    />
                    <PlanCard
                        title="Bi-Weekly"
                        blurb="The sweet spot for most busy homes."
                        request={sample_home(Frequency::BiWeekly)}
                        perks={vec!["Priority scheduling".to_string(), "Same team every visit".to_string(), discount_perk(Frequency::BiWeekly)]}
                        popular={true}
                    />
                    <PlanCard
                        title="Weekly"
                        blurb="For the ultimate maintenance routine."
                        request={sample_home(Frequency::Weekly)}
                        perks={vec!["Ultra-consistent sparkle".to_string(), "Dedicated team".to_string(), discount_perk(Frequency::Weekly)]}
                    />
                </div>
            </section>

            <section class="section alt">
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
                <h2>{"Ready for a Cleaner Home?"}</h2>
                <p>{"Get your personalized quote in a minute and book it on WhatsApp."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Request a Quote"}</Link<Route>>
                    <a class="btn btn-outline" href={whatsapp_href} target="_blank" rel="noopener noreferrer">
                        {"Chat on WhatsApp"}
                    </a>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::plan_card::plan_price;

    #[test]
    fn plan_prices_follow_the_recurring_discounts() {
        assert_eq!(plan_price(&sample_home(Frequency::OneTime)), 145);
        assert_eq!(plan_price(&sample_home(Frequency::BiWeekly)), 140);
        assert_eq!(plan_price(&sample_home(Frequency::Weekly)), 130);
    }

    #[test]
    fn discount_perks_quote_the_real_rates() {
        assert_eq!(discount_perk(Frequency::BiWeekly), "5% off every visit");
        assert_eq!(discount_perk(Frequency::Weekly), "10% off every visit");
    }
}
