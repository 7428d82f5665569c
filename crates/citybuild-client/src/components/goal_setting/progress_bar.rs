//! Step progress line with one dot per wizard step.

use citybuild_core::GoalStep;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub current: GoalStep,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let current = props.current.index();

    let dots = GoalStep::all().map(|step| {
        let reached = step.index() <= current;
        html! {
            <div key={step.index()} class={classes!("progress-step", reached.then_some("reached"))}>
                <div class="progress-dot" />
                <p class="progress-label">{ step.title() }</p>
            </div>
        }
    });

    html! {
        <div class="progress-bar">
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style={format!("width: {:.1}%;", props.current.progress() * 100.0)}
                />
            </div>
            <div class="progress-steps">
                { for dots }
            </div>
        </div>
    }
}
