use yew::prelude::*;

use crate::quote::{AddOn, ServiceType};

struct ServiceCard {
    service: ServiceType,
    blurb: &'static str,
    includes: &'static [&'static str],
}

const HOME_SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        service: ServiceType::StandardHomeCare,
        blurb: "Maintenance sparkle for busy lifestyles. Weekly or bi-weekly cleaning that keeps your home fresh between deep cleans.",
        includes: &["Dusting and surfaces", "Kitchen and bathroom wipe-down", "Floors swept and mopped"],
    },
    ServiceCard {
        service: ServiceType::DeepRefresh,
        blurb: "Top-to-bottom reset for a complete renewal. Perfect for seasonal deep cleans or when everything needs to feel new again.",
        includes: &["Inside cabinets and appliances", "Scale and grime removal", "High and low detail work"],
    },
    ServiceCard {
        service: ServiceType::MoveInOut,
        blurb: "Comprehensive cleaning for transitions. Leave a place in hand-over condition or arrive to a move-in ready space.",
        includes: &["Empty-room deep clean", "Cupboards and wardrobes", "Fixtures and fittings"],
    },
];

const SHORT_STAY_SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        service: ServiceType::Turnover,
        blurb: "Between-guest refresh with meticulous attention to detail. Linen change, bathroom disinfection and a kitchen reset.",
        includes: &["Linen change", "Bathroom disinfection", "Kitchen reset"],
    },
    ServiceCard {
        service: ServiceType::GuestReadyPresentation,
        blurb: "Staging and a photo-ready finish. Perfect linens, amenities and presentation for maximum guest satisfaction.",
        includes: &["Hotel-style bed making", "Amenity staging", "Final walkthrough"],
    },
    ServiceCard {
        service: ServiceType::RoutinePropertyCare,
        blurb: "Scheduled maintenance to keep spaces pristine. Weekly, bi-weekly or monthly visits.",
        includes: &["Common areas", "Surfaces and floors", "Consistent checklist"],
    },
];

fn add_on_blurb(add_on: AddOn) -> &'static str {
    match add_on {
        AddOn::InteriorWindows => "Interior window cleaning by room or for the entire property.",
        AddOn::Laundry => "Linens, towels or guest laundry, washed and folded.",
        AddOn::FridgeOven => "Fridge shelves out and sanitized, oven degreased.",
        AddOn::EdgesDetails => "Baseboards, trim and the details a quick clean skips.",
    }
}

fn quote_link(service: ServiceType) -> String {
    format!("/quote?service={}", service.value())
}

fn service_card(card: &ServiceCard) -> Html {
    html! {
        <div class="card service-card">
            <h3>{card.service.label()}</h3>
            <p>{card.blurb}</p>
            <ul>
                { for card.includes.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
            <a class="btn btn-outline" href={quote_link(card.service)}>{"Get a quote"}</a>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-header">
                <h1>{"Our Services"}</h1>
                <p>{"From weekly maintenance to guest-ready turnover, we offer premium cleaning tailored to your needs."}</p>
            </section>

            <section class="section">
                <h2>{"For Homes & Apartments"}</h2>
                <div class="card-grid three">
                    { for HOME_SERVICES.iter().map(service_card) }
                </div>
            </section>

            <section class="section alt">
                <h2>{"For Short-Stays, Hotels & Guest Houses"}</h2>
                <div class="card-grid three">
                    { for SHORT_STAY_SERVICES.iter().map(service_card) }
                </div>
            </section>

            <section class="section">
                <h2>{"Add-ons"}</h2>
                <div class="card-grid two">
                    { for AddOn::ALL.iter().map(|add_on| html! {
                        <div class="card">
                            <h3>{add_on.label()}</h3>
                            <p>{add_on_blurb(*add_on)}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
