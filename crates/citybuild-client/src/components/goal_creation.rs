//! New action goal overlay content.

use citybuild_core::bridge::CREATE_ACTION_GOAL;
use citybuild_core::BridgeMessage;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::bridge;

const FINAL_GOALS: [&str; 2] = ["Land a job at a global company", "Graduate school"];
const SUB_GOALS: [&str; 2] = ["English", "Interview prep"];

#[derive(Properties, PartialEq)]
pub struct GoalCreationProps {
    pub on_close: Callback<()>,
}

#[function_component(GoalCreation)]
pub fn goal_creation(props: &GoalCreationProps) -> Html {
    let action_name = use_state(String::new);
    let final_goal = use_state(|| FINAL_GOALS[0].to_string());
    let sub_goal = use_state(String::new);

    let on_name_input = {
        let action_name = action_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            action_name.set(input.value());
        })
    };

    let select_into = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.set(select.value());
        })
    };
    let on_final_change = select_into(final_goal.clone());
    let on_sub_change = select_into(sub_goal.clone());

    let on_submit = {
        let action_name = action_name.clone();
        let final_goal = final_goal.clone();
        let sub_goal = sub_goal.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let draft = serde_json::json!({
                "actionName": *action_name,
                "finalGoal": *final_goal,
                "subGoal": *sub_goal,
            });
            tracing::info!(%draft, "creating action goal");
            bridge::send(&BridgeMessage::with_data(CREATE_ACTION_GOAL, draft));
            on_close.emit(());
        })
    };

    html! {
        <div class="goal-creation">
            <div class="detail-field">
                <label for="action-name">{ "Action" }</label>
                <input
                    id="action-name"
                    type="text"
                    placeholder="Name the action."
                    value={(*action_name).clone()}
                    oninput={on_name_input}
                />
            </div>

            <div class="detail-selects">
                <label>
                    { "Final goal" }
                    <select onchange={on_final_change}>
                        { for FINAL_GOALS.iter().map(|goal| html! {
                            <option value={*goal} selected={*final_goal == *goal}>{ *goal }</option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Sub goal" }
                    <select onchange={on_sub_change}>
                        <option value="" selected={sub_goal.is_empty()}>{ "Choose a sub goal" }</option>
                        { for SUB_GOALS.iter().map(|goal| html! {
                            <option value={*goal} selected={*sub_goal == *goal}>{ *goal }</option>
                        }) }
                    </select>
                </label>
            </div>

            <button class="btn btn-primary" onclick={on_submit}>{ "Create action goal" }</button>
        </div>
    }
}
