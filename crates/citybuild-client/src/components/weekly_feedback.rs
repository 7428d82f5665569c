//! Weekly feedback overlay content.

use std::rc::Rc;

use citybuild_core::WeeklyFeedback;
use citybuild_core::feedback::WeeklyAction;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct WeeklyFeedbackContentProps {
    pub on_close: Callback<()>,
}

enum ReviewEdit {
    Expand(u32),
    Adjust(u32, i32),
    ToggleNote(u32, u32),
}

#[derive(PartialEq)]
struct Review(WeeklyFeedback);

impl Reducible for Review {
    type Action = ReviewEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        let changed = match action {
            ReviewEdit::Expand(id) => next.toggle_expanded(id),
            ReviewEdit::Adjust(id, delta) => next.adjust_performed(id, delta).is_some(),
            ReviewEdit::ToggleNote(id, note) => next.toggle_feedback(id, note),
        };
        if changed { Rc::new(Self(next)) } else { self }
    }
}

#[function_component(WeeklyFeedbackContent)]
pub fn weekly_feedback_content(props: &WeeklyFeedbackContentProps) -> Html {
    let review = use_reducer_eq(|| Review(WeeklyFeedback::sample()));
    let weekly = &review.0;

    let row = |action: &WeeklyAction| {
        let id = action.id;
        let on_expand = {
            let review = review.clone();
            Callback::from(move |_: MouseEvent| review.dispatch(ReviewEdit::Expand(id)))
        };

        let counter = if action.is_recommended {
            let adjust = |delta: i32| {
                let review = review.clone();
                Callback::from(move |_: MouseEvent| review.dispatch(ReviewEdit::Adjust(id, delta)))
            };
            html! {
                <div class="feedback-counter">
                    <button class="counter-btn" onclick={adjust(-1)}>{ "LESS" }</button>
                    <span>{ format!("{} / {}", action.performed, action.recommended) }</span>
                    <button class="counter-btn" onclick={adjust(1)}>{ "MORE" }</button>
                </div>
            }
        } else {
            html! {
                <span class="feedback-total">{ format!("{} total", action.total_performed) }</span>
            }
        };

        let notes = action.feedbacks.iter().map(|note| {
            let note_id = note.id;
            let onchange = {
                let review = review.clone();
                Callback::from(move |_: Event| review.dispatch(ReviewEdit::ToggleNote(id, note_id)))
            };
            html! {
                <label key={note.id} class="feedback-note">
                    <input type="checkbox" checked={note.checked} {onchange} />
                    <span>{ note.text.clone() }</span>
                </label>
            }
        });

        let chevron = if action.is_expanded {
            IconData::LUCIDE_CHEVRON_UP
        } else {
            IconData::LUCIDE_CHEVRON_DOWN
        };

        html! {
            <div key={id} class="feedback-action">
                <div class="feedback-action-row">
                    <button class="feedback-action-name" onclick={on_expand}>
                        { action.name.clone() }
                        <Icon data={chevron} width="14px" height="14px" />
                    </button>
                    { counter }
                </div>
                if action.is_expanded {
                    <div class="feedback-notes">
                        if action.feedbacks.is_empty() {
                            <p class="feedback-empty">{ "No feedback yet." }</p>
                        } else {
                            { for notes }
                        }
                    </div>
                }
            </div>
        }
    };

    html! {
        <div class="weekly-feedback">
            <div class="weekly-feedback-header">
                <h2>{ "Weekly feedback" }</h2>
                <button class="icon-btn" onclick={props.on_close.reform(|_| ())}>
                    <Icon data={IconData::LUCIDE_X} width="20px" height="20px" />
                </button>
            </div>
            <p class="week-label">{ weekly.week_label.clone() }</p>

            <section class="feedback-section">
                <h3>{ "Recommended actions" }</h3>
                { for weekly.recommended().map(&row) }
            </section>

            <section class="feedback-section">
                <h3>{ "Other actions" }</h3>
                { for weekly.unrecommended().map(&row) }
            </section>

            <button class="btn btn-primary" onclick={props.on_close.reform(|_| ())}>
                { "Done" }
            </button>
        </div>
    }
}
