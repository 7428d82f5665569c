//! Main application component.

use citybuild_core::ClientConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::OnboardingProvider;
use crate::pages::{GoalSettingPage, HomePage, NotFoundPage};
use crate::routes::Route;

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::GoalSetting => html! { <GoalSettingPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Props for the root component.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

/// Root application component with router.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <OnboardingProvider initial={props.config.onboarding}>
                <Switch<Route> render={switch} />
            </OnboardingProvider>
        </BrowserRouter>
    }
}
