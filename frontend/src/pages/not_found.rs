use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found page-header">
            <h1>{"Page not found"}</h1>
            <p>{"That page doesn't exist, but your quote is one click away."}</p>
            <div class="hero-actions">
                <Link<Route> to={Route::Home} classes="btn btn-outline">{"Back home"}</Link<Route>>
                <Link<Route> to={Route::Quote} classes="btn btn-primary">{"Get a quote"}</Link<Route>>
            </div>
        </div>
    }
}
