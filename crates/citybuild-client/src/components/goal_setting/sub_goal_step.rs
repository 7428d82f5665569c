//! Sub goal step: title, deadline, completion criteria and actions.

use std::collections::BTreeSet;

use chrono::Weekday;
use citybuild_core::goal_setting::{Criteria, Deadline, SubGoalDraft};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::{DeadlineSection, WeeklySchedule};

#[derive(Properties, PartialEq)]
pub struct SubGoalStepProps {
    /// Zero-based sub goal index.
    pub index: usize,
    pub goal: SubGoalDraft,
    pub on_change: Callback<SubGoalDraft>,
}

fn action_input_id(index: usize, action: u32) -> String {
    format!("sub-goal-{index}-action-{action}")
}

#[function_component(SubGoalStep)]
pub fn sub_goal_step(props: &SubGoalStepProps) -> Html {
    let open_schedules = use_state(BTreeSet::<u32>::new);
    let focus_id = use_state(|| None::<u32>);

    // Focus a freshly added action once it is rendered.
    {
        let focus_id = focus_id.clone();
        let index = props.index;
        use_effect_with((*focus_id, props.goal.actions.len()), move |(pending, _)| {
            if let Some(id) = *pending {
                let element = gloo::utils::document()
                    .get_element_by_id(&action_input_id(index, id))
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if let Some(element) = element {
                    if let Err(e) = element.focus() {
                        tracing::debug!("failed to focus new action: {:?}", e);
                    }
                    focus_id.set(None);
                }
            }
        });
    }

    // Every edit clones the draft, changes it and hands it back up.
    let edit = |apply: fn(&mut SubGoalDraft)| {
        let goal = props.goal.clone();
        props.on_change.reform(move |_: MouseEvent| {
            let mut next = goal.clone();
            apply(&mut next);
            next
        })
    };

    let on_title = {
        let goal = props.goal.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SubGoalDraft {
                title: input.value(),
                ..goal.clone()
            }
        })
    };

    let on_deadline = {
        let goal = props.goal.clone();
        props.on_change.reform(move |deadline: Deadline| SubGoalDraft {
            deadline,
            ..goal.clone()
        })
    };

    let on_count = {
        let goal = props.goal.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SubGoalDraft {
                criteria: Criteria::Count,
                count_value: input.value(),
                ..goal.clone()
            }
        })
    };

    let on_add_action = {
        let goal = props.goal.clone();
        let on_change = props.on_change.clone();
        let focus_id = focus_id.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = goal.clone();
            let id = next.add_action();
            focus_id.set(Some(id));
            on_change.emit(next);
        })
    };

    let actions = props.goal.actions.iter().enumerate().map(|(position, action)| {
        let id = action.id;

        let oninput = {
            let goal = props.goal.clone();
            props.on_change.reform(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = goal.clone();
                next.set_action_text(id, input.value());
                next
            })
        };

        // Blank actions disappear when the input loses focus.
        let onblur = {
            let goal = props.goal.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: FocusEvent| {
                let mut next = goal.clone();
                if next.commit_action(id) {
                    on_change.emit(next);
                }
            })
        };

        let on_toggle_schedule = {
            let open_schedules = open_schedules.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*open_schedules).clone();
                if !next.remove(&id) {
                    next.insert(id);
                }
                open_schedules.set(next);
            })
        };

        let on_toggle_day = {
            let goal = props.goal.clone();
            props.on_change.reform(move |day: Weekday| {
                let mut next = goal.clone();
                if let Some(action) = next.action_mut(id) {
                    action.toggle_day(day);
                }
                next
            })
        };

        let schedule_open = open_schedules.contains(&id);
        let repeat_active = schedule_open || !action.selected_days.is_empty();

        html! {
            <div key={id} class="action-draft">
                <div class="action-row">
                    <span class="action-number">{ format!("{}.", position + 1) }</span>
                    <input
                        id={action_input_id(props.index, id)}
                        type="text"
                        value={action.text.clone()}
                        placeholder="Enter an action"
                        {oninput}
                        {onblur}
                    />
                    <button
                        class={classes!("repeat-toggle", repeat_active.then_some("active"))}
                        onclick={on_toggle_schedule}
                    >
                        <Icon data={IconData::LUCIDE_REPEAT} width="13px" height="13px" />
                    </button>
                </div>
                if schedule_open {
                    <WeeklySchedule
                        selected={action.selected_days.clone()}
                        on_toggle={on_toggle_day}
                    />
                }
            </div>
        }
    });

    let criteria = props.goal.criteria;

    html! {
        <>
            <h2 class="step-title">{ "Sub goals and actions" }</h2>
            <h3 class="step-subtitle">{ format!("Sub goal {}", props.index + 1) }</h3>
            <div class="sub-goal-form">
                <input
                    type="text"
                    value={props.goal.title.clone()}
                    placeholder="Enter a sub goal (up to 15 characters)"
                    oninput={on_title}
                />
                <DeadlineSection
                    deadline={props.goal.deadline.clone()}
                    on_change={on_deadline}
                    has_checkbox=true
                />
                <div class="criteria-card">
                    <label class="field-label">{ "Completion criteria" }</label>
                    <div class="segmented">
                        <button
                            class={classes!("segment", (criteria == Criteria::SelfCheck).then_some("active"))}
                            onclick={edit(|goal| goal.criteria = Criteria::SelfCheck)}
                        >
                            { "Check it myself" }
                        </button>
                        <button
                            class={classes!("segment", (criteria == Criteria::Count).then_some("active"))}
                            onclick={edit(|goal| goal.criteria = Criteria::Count)}
                        >
                            <input
                                type="number"
                                class="count-input"
                                value={props.goal.count_value.clone()}
                                oninput={on_count}
                            />
                            { " times or more" }
                        </button>
                    </div>
                </div>
                <div class="actions-card">
                    <p class="field-label">{ "Actions" }</p>
                    { for actions }
                    <button class="btn btn-primary add-action" onclick={on_add_action}>
                        { "+ New action" }
                    </button>
                </div>
            </div>
        </>
    }
}
