//! Fixed weekday picker for a recurring action.

use chrono::Weekday;
use citybuild_core::goal_setting::WEEK;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeeklyScheduleProps {
    pub selected: Vec<Weekday>,
    pub on_toggle: Callback<Weekday>,
}

#[function_component(WeeklySchedule)]
pub fn weekly_schedule(props: &WeeklyScheduleProps) -> Html {
    let days = WEEK.iter().map(|&day| {
        let selected = props.selected.contains(&day);
        html! {
            <button
                key={day.to_string()}
                class={classes!("weekday", selected.then_some("selected"))}
                onclick={props.on_toggle.reform(move |_: MouseEvent| day)}
            >
                { day.to_string() }
            </button>
        }
    });

    html! {
        <div class="weekly-schedule">
            <h4>{ "Fixed days" }</h4>
            <div class="weekday-row">{ for days }</div>
        </div>
    }
}
