use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod quote;
mod whatsapp;
mod components {
    pub mod faq_item;
    pub mod footer;
    pub mod notification;
    pub mod plan_card;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod for_homes;
    pub mod for_short_stays;
    pub mod home;
    pub mod money;
    pub mod not_found;
    pub mod quote;
    pub mod services;
}

use components::footer::Footer;
use pages::{
    about::About,
    contact::Contact,
    for_homes::ForHomes,
    for_short_stays::ForShortStays,
    home::Home,
    money::Pricing,
    not_found::NotFound,
    quote::QuotePage,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/for-homes")]
    ForHomes,
    #[at("/for-short-stays")]
    ForShortStays,
    #[at("/pricing")]
    Pricing,
    #[at("/quote")]
    Quote,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::ForHomes => {
            info!("Rendering For Homes page");
            html! { <ForHomes /> }
        },
        Route::ForShortStays => {
            info!("Rendering For Short-Stays page");
            html! { <ForShortStays /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <QuotePage /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|el| el.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > 80);
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Services, "Services"),
        (Route::ForHomes, "For Homes"),
        (Route::ForShortStays, "For Short-Stays"),
        (Route::Pricing, "Pricing"),
        (Route::About, "About"),
        (Route::Contact, "Contact"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BUSINESS.name}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Quote} classes="nav-cta">
                            {"Get a quote"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", config::BUSINESS.name);
    yew::Renderer::<App>::new().render();
}
