//! Feedback notes per sub goal action, editable in place.

use std::rc::Rc;

use citybuild_core::{FeedbackBoard, FeedbackKey};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

enum BoardEdit {
    Toggle(FeedbackKey),
    Delete(FeedbackKey, usize),
    StartAdding(FeedbackKey),
    Draft(String),
    Commit,
    Cancel,
}

#[derive(PartialEq)]
struct Board(FeedbackBoard);

impl Reducible for Board {
    type Action = BoardEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            BoardEdit::Toggle(key) => next.toggle_action(key),
            BoardEdit::Delete(key, index) => {
                if let Some(text) = next.delete_feedback(key, index) {
                    tracing::debug!(%text, "feedback deleted");
                }
            }
            BoardEdit::StartAdding(key) => next.start_adding(key),
            BoardEdit::Draft(text) => next.set_draft(text),
            BoardEdit::Commit => {
                next.commit_draft();
            }
            BoardEdit::Cancel => next.cancel_adding(),
        }
        Rc::new(Self(next))
    }
}

#[function_component(FeedbackList)]
pub fn feedback_list() -> Html {
    let board = use_reducer_eq(|| Board(FeedbackBoard::sample()));
    let dispatch = |edit: fn() -> BoardEdit| {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| board.dispatch(edit()))
    };

    let action_view = |key: FeedbackKey, name: &str, feedbacks: &[String]| {
        let expanded = board.0.is_expanded(key);
        let on_toggle = {
            let board = board.clone();
            Callback::from(move |_: MouseEvent| board.dispatch(BoardEdit::Toggle(key)))
        };

        let notes = feedbacks.iter().enumerate().map(|(index, text)| {
            let on_delete = {
                let board = board.clone();
                Callback::from(move |_: MouseEvent| board.dispatch(BoardEdit::Delete(key, index)))
            };
            html! {
                <li class="feedback-item">
                    <span>{ text.clone() }</span>
                    <button class="icon-btn" onclick={on_delete}>
                        <Icon data={IconData::LUCIDE_TRASH_2} width="14px" height="14px" />
                    </button>
                </li>
            }
        });

        let editor = if board.0.is_adding(key) {
            let oninput = {
                let board = board.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    board.dispatch(BoardEdit::Draft(input.value()));
                })
            };
            let onkeydown = {
                let board = board.clone();
                Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                    "Enter" => board.dispatch(BoardEdit::Commit),
                    "Escape" => board.dispatch(BoardEdit::Cancel),
                    _ => {}
                })
            };
            html! {
                <div class="feedback-editor">
                    <input
                        type="text"
                        value={board.0.draft().to_string()}
                        placeholder="Write feedback"
                        {oninput}
                        {onkeydown}
                    />
                    <button class="btn btn-primary" onclick={dispatch(|| BoardEdit::Commit)}>{ "Add" }</button>
                    <button class="btn" onclick={dispatch(|| BoardEdit::Cancel)}>{ "Cancel" }</button>
                </div>
            }
        } else {
            let on_start = {
                let board = board.clone();
                Callback::from(move |_: MouseEvent| board.dispatch(BoardEdit::StartAdding(key)))
            };
            html! {
                <button class="add-feedback" onclick={on_start}>{ "+ Add feedback" }</button>
            }
        };

        html! {
            <div class="feedback-board-action">
                <button class="feedback-board-action-head" onclick={on_toggle}>
                    <span>{ name.to_string() }</span>
                    <span class="feedback-count">{ feedbacks.len() }</span>
                </button>
                if expanded {
                    <ul class="feedback-items">{ for notes }</ul>
                    { editor }
                }
            </div>
        }
    };

    let sub_goals = board.0.sub_goals().iter().enumerate().map(|(sub_goal, goal)| {
        let actions = goal.actions.iter().enumerate().map(|(action, item)| {
            action_view(FeedbackKey { sub_goal, action }, &item.name, &item.feedbacks)
        });
        html! {
            <div class="feedback-sub-goal">
                <div class="feedback-sub-goal-head">
                    <span class="chip" style={format!("background: {};", goal.color)}>{ goal.tag.clone() }</span>
                    <span>{ goal.name.clone() }</span>
                </div>
                { for actions }
            </div>
        }
    });

    html! {
        <div class="feedback-list">
            <h3>{ "Feedback" }</h3>
            { for sub_goals }
        </div>
    }
}
