//! Today's todo list rendered inside the bottom sheet.

use citybuild_core::todo::format_header_date;
use citybuild_core::{TodoItem, TodoList};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::time::today;

/// Props for the TodoListContent component.
#[derive(Properties, PartialEq)]
pub struct TodoListContentProps {
    pub on_todo_click: Callback<TodoItem>,
    pub on_create_click: Callback<()>,
}

#[function_component(TodoListContent)]
pub fn todo_list_content(props: &TodoListContentProps) -> Html {
    let todos = use_state(TodoList::sample);

    let on_toggle = {
        let todos = todos.clone();
        Callback::from(move |id: u32| {
            let mut next = (*todos).clone();
            if next.toggle(id) {
                todos.set(next);
            }
        })
    };

    let (completed, total) = todos.progress();
    let header = today().map(format_header_date).unwrap_or_default();

    let rows = todos.sorted().into_iter().map(|todo| {
        let onclick = {
            let on_todo_click = props.on_todo_click.clone();
            let todo = todo.clone();
            Callback::from(move |_: MouseEvent| on_todo_click.emit(todo.clone()))
        };
        let on_check = {
            let on_toggle = on_toggle.clone();
            let id = todo.id;
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_toggle.emit(id);
            })
        };
        let check_icon = if todo.is_completed {
            IconData::LUCIDE_CHECK
        } else {
            IconData::LUCIDE_SQUARE
        };

        html! {
            <div
                key={todo.id}
                class={classes!("todo-row", todo.is_completed.then_some("completed"))}
                onclick={onclick}
            >
                <span class="todo-text">{ todo.text.clone() }</span>
                <span class="todo-tag">{ todo.tag.clone() }</span>
                <button class="todo-check" onclick={on_check}>
                    <Icon data={check_icon} width="18px" height="18px" />
                </button>
            </div>
        }
    });

    html! {
        <div class="todo-list">
            <div class="todo-header">
                <p class="todo-date">{ header }{ " to-dos" }</p>
                <span class="todo-progress">{ format!("Done: {completed}/{total}") }</span>
            </div>
            <div class="todo-rows">
                { for rows }
                <button class="todo-add" onclick={props.on_create_click.reform(|_| ())}>
                    <Icon data={IconData::LUCIDE_PLUS} width="20px" height="20px" />
                </button>
            </div>
        </div>
    }
}
