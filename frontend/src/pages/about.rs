use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::BUSINESS;
use crate::Route;

const VALUES: [(&str, &str); 3] = [
    (
        "Precision",
        "We clean for the finish. Surfaces that sparkle, corners that look cared for, rooms that feel light and fresh.",
    ),
    (
        "Calm, respectful service",
        "Professional, discreet and mindful of your belongings and privacy.",
    ),
    (
        "Trust",
        "Background-checked and trained to one standard. We earn your trust every visit.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-header">
                <h1>{format!("The Story Behind {}", BUSINESS.name)}</h1>
                <p>{"We believe your home should feel like a sanctuary, and that booking a clean should be as easy as sending a message."}</p>
            </section>

            <section class="section">
                <h2>{format!("Why we started {}", BUSINESS.name)}</h2>
                <p>
                    {"People are busy. Busy with work, family, guests and bookings, and somewhere in the middle the cleaning slips. Premium cleaning shouldn't mean chasing quotes, inconsistent quality or surprise charges."}
                </p>
                <p>
                    {format!(
                        "So {} prices every job up front from the details you give us, itemizes it, and confirms the rest on WhatsApp. Whether you come home to a family house or manage a row of short-stay units, you know what you're paying before we arrive.",
                        BUSINESS.name
                    )}
                </p>
            </section>

            <section class="section alt">
                <h2>{format!("The {} standard", BUSINESS.name)}</h2>
                <div class="card-grid three">
                    { for VALUES.iter().map(|(title, body)| html! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{format!("Experience the {} difference", BUSINESS.name)}</h2>
                <p>{format!("Serving {}.", BUSINESS.service_area)}</p>
                <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Book your first clean"}</Link<Route>>
            </section>
        </div>
    }
}
