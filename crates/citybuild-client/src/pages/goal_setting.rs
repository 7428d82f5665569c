//! Goal-setting wizard page.

use std::rc::Rc;

use citybuild_core::bridge::GOAL_SETTING_COMPLETED;
use citybuild_core::goal_setting::{FinalGoalDraft, SubGoalDraft};
use citybuild_core::{Advance, BridgeMessage, GoalSettingWizard, GoalStep, StepError};
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::bridge;
use crate::components::goal_setting::{FinalGoalStep, ProgressBar, SubGoalStep, VillageNameStep};
use crate::routes::Route;
use crate::time;

enum WizardAction {
    FinalGoal(FinalGoalDraft),
    SubGoal(usize, SubGoalDraft),
    VillageName(String),
    Next,
    Back,
}

#[derive(Clone, PartialEq)]
struct WizardState {
    wizard: GoalSettingWizard,
    error: Option<StepError>,
    completed: bool,
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::FinalGoal(draft) => {
                next.wizard.data_mut().final_goal = draft;
                next.error = None;
            }
            WizardAction::SubGoal(index, draft) => {
                if let Some(slot) = next.wizard.data_mut().sub_goals.get_mut(index) {
                    *slot = draft;
                }
                next.error = None;
            }
            WizardAction::VillageName(name) => {
                next.wizard.data_mut().village_name = name;
                next.error = None;
            }
            WizardAction::Next => match next.wizard.next() {
                Ok(Advance::Moved(step)) => {
                    tracing::debug!(step = step.index(), "goal setting advanced");
                    next.error = None;
                }
                Ok(Advance::Completed) => {
                    next.error = None;
                    next.completed = true;
                }
                Err(e) => next.error = Some(e),
            },
            WizardAction::Back => {
                next.wizard.back();
                next.error = None;
            }
        }
        Rc::new(next)
    }
}

#[function_component(GoalSettingPage)]
pub fn goal_setting_page() -> Html {
    let navigator = use_navigator();
    let state = use_reducer_eq(|| {
        let today = time::today().unwrap_or_else(|| {
            tracing::warn!("could not read today's date, using the epoch");
            chrono::NaiveDate::default()
        });
        WizardState {
            wizard: GoalSettingWizard::new(today),
            error: None,
            completed: false,
        }
    });

    // Submit once the last step passes.
    {
        let navigator = navigator.clone();
        let state = state.clone();
        use_effect_with(state.completed, move |completed| {
            if *completed {
                let data = state.wizard.data();
                tracing::info!(village = %data.village_name, "goal setting completed");
                match serde_json::to_value(data) {
                    Ok(value) => bridge::send(&BridgeMessage::with_data(GOAL_SETTING_COMPLETED, value)),
                    Err(e) => tracing::error!("failed to serialize goal setting form: {}", e),
                }
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            }
        });
    }

    let step = state.wizard.step();

    let on_back = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if step == GoalStep::FinalGoal {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            } else {
                state.dispatch(WizardAction::Back);
            }
        })
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(WizardAction::Next))
    };

    let data = state.wizard.data();
    let content = match step {
        GoalStep::FinalGoal => {
            let dispatcher = state.dispatcher();
            html! {
                <FinalGoalStep
                    data={data.final_goal.clone()}
                    on_change={Callback::from(move |draft| dispatcher.dispatch(WizardAction::FinalGoal(draft)))}
                />
            }
        }
        GoalStep::SubGoal(index) => match data.sub_goals.get(index) {
            Some(goal) => {
                let dispatcher = state.dispatcher();
                html! {
                    <SubGoalStep
                        key={index}
                        {index}
                        goal={goal.clone()}
                        on_change={Callback::from(move |draft| dispatcher.dispatch(WizardAction::SubGoal(index, draft)))}
                    />
                }
            }
            None => html! {},
        },
        GoalStep::VillageName => {
            let dispatcher = state.dispatcher();
            html! {
                <VillageNameStep
                    value={data.village_name.clone()}
                    on_change={Callback::from(move |name| dispatcher.dispatch(WizardAction::VillageName(name)))}
                />
            }
        }
    };

    let next_label = if state.wizard.is_last_step() { "Done" } else { "Next" };

    html! {
        <main class="page goal-setting-page">
            <header class="goal-setting-header">
                <button class="icon-btn" onclick={on_back}>
                    <Icon data={IconData::LUCIDE_CHEVRON_LEFT} width="20px" height="20px" />
                </button>
                <h1>{ "Goal setting" }</h1>
            </header>

            <ProgressBar current={step} />

            <section class="goal-setting-content">
                { content }
            </section>

            if let Some(error) = &state.error {
                <p class="form-error">{ error.to_string() }</p>
            }

            <footer class="goal-setting-footer">
                <button class="btn btn-primary" onclick={on_next}>{ next_label }</button>
            </footer>
        </main>
    }
}
