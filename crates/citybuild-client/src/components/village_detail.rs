//! Village detail overlay content.

use citybuild_core::VillageSummary;
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use super::FeedbackList;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct VillageDetailProps {
    /// Village title picked on the city screen.
    pub village: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(VillageDetail)]
pub fn village_detail(props: &VillageDetailProps) -> Html {
    let summary = use_memo((), |_| VillageSummary::sample());

    let sub_goals = summary.sub_goals.iter().enumerate().map(|(index, goal)| {
        html! {
            <div class="sub-goal-row">
                <div class="sub-goal-name">
                    { format!("{}. ", index + 1) }
                    <span class="chip">
                        { goal.name.clone() }
                        <Icon data={IconData::LUCIDE_PENCIL} width="10px" height="10px" />
                    </span>
                </div>
                <ul class="sub-goal-actions">
                    { for goal.actions.iter().map(|action| html! { <li>{ action.clone() }</li> }) }
                </ul>
            </div>
        }
    });

    html! {
        <div class="village-detail">
            <div class="village-header">
                <div class="village-thumb" />
                <div>
                    <h2>{ props.village.clone() }</h2>
                    <p class="village-meta">
                        <span>{ format!("Started: {}", summary.start_date) }</span>
                        <span>{ format!("Manager: {}", summary.manager) }</span>
                    </p>
                </div>
            </div>

            <div class="village-stat">
                <p>{ "Actions completed" }</p>
                <strong>{ summary.total_actions }</strong>
            </div>

            <div class="village-final-goal">
                <h3>{ "Final goal" }</h3>
                <div class="chip">{ summary.final_goal.clone() }</div>
            </div>

            <div class="village-sub-goals">
                <div class="sub-goal-head">
                    <h3>{ "Sub goals" }</h3>
                    <h3>{ "Actions" }</h3>
                </div>
                { for sub_goals }
            </div>

            <FeedbackList />

            <div class="village-actions">
                <Link<Route> to={Route::GoalSetting} classes="btn">
                    { "Set new goals" }
                </Link<Route>>
                <button class="btn btn-primary" onclick={props.on_close.reform(|_| ())}>
                    { "Close" }
                </button>
            </div>
        </div>
    }
}
