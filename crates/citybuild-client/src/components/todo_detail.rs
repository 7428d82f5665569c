//! Todo detail overlay content.

use citybuild_core::TodoItem;
use yew::prelude::*;

const FINAL_GOAL: &str = "Land a job at a global company";
const FEEDBACK: [&str; 3] = [
    "Don't subvocalize",
    "Summarize while reading",
    "Note unknown words",
];

#[derive(Properties, PartialEq)]
pub struct TodoDetailProps {
    pub todo: Option<TodoItem>,
    pub on_close: Callback<()>,
}

#[function_component(TodoDetail)]
pub fn todo_detail(props: &TodoDetailProps) -> Html {
    let Some(todo) = props.todo.as_ref() else {
        return html! { <div class="detail-empty">{ "This action could not be loaded." }</div> };
    };

    html! {
        <div class="todo-detail">
            <div class="detail-field">
                <label>{ "Action" }</label>
                <input type="text" value={todo.text.clone()} readonly=true />
            </div>

            <div class="detail-field">
                <label>{ "Category" }</label>
                <div class="detail-selects">
                    <select><option>{ FINAL_GOAL }</option></select>
                    <select><option>{ todo.tag.clone() }</option></select>
                </div>
            </div>

            <div class="detail-field">
                <label>{ "Feedback" }</label>
                <ul class="feedback-list">
                    { for FEEDBACK.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </div>

            <div class="detail-counts">
                <p>{ "Total completions: " }<strong>{ "8" }</strong></p>
                <p>{ "This week: " }<strong>{ "2" }</strong></p>
            </div>

            <button class="btn btn-primary" onclick={props.on_close.reform(|_| ())}>
                { "Close" }
            </button>
        </div>
    }
}
