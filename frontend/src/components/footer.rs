use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{BUSINESS, WHATSAPP_GREETING};
use crate::whatsapp::build_whatsapp_url;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let whatsapp_href = build_whatsapp_url(BUSINESS.whatsapp_number, WHATSAPP_GREETING);

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{BUSINESS.name}</h3>
                    <p>{BUSINESS.tagline}</p>
                </div>
                <div>
                    <h4>{"Explore"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ForHomes}>{"For Homes"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ForShortStays}>{"For Short-Stays"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Quote}>{"Request a quote"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About us"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={BUSINESS.phone_href}>{BUSINESS.phone_display}</a></li>
                        <li>
                            <a href={whatsapp_href} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                        </li>
                        <li>{BUSINESS.address}</li>
                        <li>{BUSINESS.hours}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, BUSINESS.name)}</p>
        </footer>
    }
}
