//! 404 Not Found page.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "This part of the city has not been built yet." }</p>
            <Link<Route> to={Route::Home}>{ "Back to the city" }</Link<Route>>
        </main>
    }
}
