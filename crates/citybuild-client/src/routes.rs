//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// City dashboard with the todo sheet.
    #[at("/")]
    Home,
    /// First-run goal-setting wizard.
    #[at("/goal-setting")]
    GoalSetting,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
