//! First wizard step: the final goal and its deadline.

use citybuild_core::goal_setting::{Deadline, FinalGoalDraft};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::DeadlineSection;

#[derive(Properties, PartialEq)]
pub struct FinalGoalStepProps {
    pub data: FinalGoalDraft,
    pub on_change: Callback<FinalGoalDraft>,
}

#[function_component(FinalGoalStep)]
pub fn final_goal_step(props: &FinalGoalStepProps) -> Html {
    let on_title = {
        let data = props.data.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FinalGoalDraft {
                title: input.value(),
                ..data.clone()
            }
        })
    };

    let on_deadline = {
        let data = props.data.clone();
        props.on_change.reform(move |deadline: Deadline| FinalGoalDraft {
            deadline,
            ..data.clone()
        })
    };

    html! {
        <>
            <h2 class="step-title">{ "What is my final goal?" }</h2>
            <div class="final-goal-card">
                <div class="final-goal-image">
                    <Icon data={IconData::LUCIDE_IMAGE} width="40px" height="40px" />
                </div>
                <input
                    type="text"
                    value={props.data.title.clone()}
                    placeholder="Enter your final goal (e.g. land a job abroad)"
                    oninput={on_title}
                />
            </div>
            <DeadlineSection deadline={props.data.deadline.clone()} on_change={on_deadline} />
        </>
    }
}
