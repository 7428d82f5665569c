//! Deadline editor shared by the final goal and sub goal steps.

use chrono::NaiveDate;
use citybuild_core::goal_setting::{Deadline, DeadlineKind, format_deadline_date};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Which end of the date range is being picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeEnd {
    Start,
    End,
}

#[derive(Properties, PartialEq)]
pub struct DeadlineSectionProps {
    pub deadline: Deadline,
    pub on_change: Callback<Deadline>,
    /// Shows an opt-in checkbox; the date inputs appear only when it is checked.
    #[prop_or(false)]
    pub has_checkbox: bool,
}

#[function_component(DeadlineSection)]
pub fn deadline_section(props: &DeadlineSectionProps) -> Html {
    let picking = use_state(|| None::<RangeEnd>);
    let error = use_state(|| None::<String>);

    let deadline = &props.deadline;

    let on_toggle_enabled = {
        let deadline = deadline.clone();
        props.on_change.reform(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Deadline {
                has_deadline: Some(input.checked()),
                ..deadline.clone()
            }
        })
    };

    let set_kind = |kind: DeadlineKind| {
        let deadline = deadline.clone();
        let on_change = props.on_change.clone();
        let picking = picking.clone();
        Callback::from(move |_: MouseEvent| {
            picking.set(None);
            on_change.emit(Deadline {
                kind,
                ..deadline.clone()
            });
        })
    };

    let pick = |end: RangeEnd| {
        let picking = picking.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            picking.set(if *picking == Some(end) { None } else { Some(end) });
        })
    };

    let on_date = {
        let deadline = deadline.clone();
        let on_change = props.on_change.clone();
        let picking = picking.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") else {
                return;
            };
            let mut next = deadline.clone();
            let result = match *picking {
                Some(RangeEnd::Start) => next.set_start(date),
                Some(RangeEnd::End) => next.set_end(date),
                None => return,
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    picking.set(None);
                    on_change.emit(next);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let on_period = {
        let deadline = deadline.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Deadline {
                period: input.value(),
                ..deadline.clone()
            }
        })
    };

    let label = |date: Option<NaiveDate>, fallback: &'static str| {
        date.map_or_else(|| fallback.to_string(), format_deadline_date)
    };

    let body = if deadline.kind == DeadlineKind::Date {
        let picker = (*picking).map(|end| {
            let current = match end {
                RangeEnd::Start => deadline.start_date,
                RangeEnd::End => deadline.end_date,
            };
            let value = current.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
            html! { <input type="date" class="date-picker" {value} onchange={on_date.clone()} /> }
        });
        html! {
            <div class="deadline-dates">
                <div class="date-range">
                    <span
                        class={classes!("date-end", (*picking == Some(RangeEnd::Start)).then_some("active"))}
                        onclick={pick(RangeEnd::Start)}
                    >
                        { label(deadline.start_date, "Start") }
                    </span>
                    <span>{ "→" }</span>
                    <span
                        class={classes!("date-end", (*picking == Some(RangeEnd::End)).then_some("active"))}
                        onclick={pick(RangeEnd::End)}
                    >
                        { label(deadline.end_date, "End") }
                    </span>
                </div>
                if let Some(message) = (*error).clone() {
                    <p class="field-error">{ message }</p>
                }
                { for picker }
            </div>
        }
    } else {
        html! {
            <div class="suffixed-input">
                <input
                    type="number"
                    value={deadline.period.clone()}
                    placeholder="e.g. 100"
                    oninput={on_period}
                />
                <span class="input-suffix">{ "days" }</span>
            </div>
        }
    };

    let segment = |kind: DeadlineKind, text: &'static str| {
        html! {
            <button
                class={classes!("segment", (deadline.kind == kind).then_some("active"))}
                onclick={set_kind(kind)}
            >
                { text }
            </button>
        }
    };

    html! {
        <div class="deadline-section">
            <div class="deadline-head">
                <p class="field-label">{ "Deadline" }</p>
                if props.has_checkbox {
                    <input
                        type="checkbox"
                        checked={deadline.is_active()}
                        onchange={on_toggle_enabled}
                    />
                }
            </div>
            if deadline.is_active() {
                <div class="deadline-body">
                    <div class="segmented">
                        { segment(DeadlineKind::Date, "Date") }
                        { segment(DeadlineKind::Period, "Period") }
                    </div>
                    { body }
                </div>
            }
        </div>
    }
}
