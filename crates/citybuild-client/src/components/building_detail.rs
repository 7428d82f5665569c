//! Building detail overlay content.

use citybuild_core::{BuildingInfo, BuildingStatus};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct BuildingDetailProps {
    pub status: BuildingStatus,
    pub on_close: Callback<()>,
}

#[function_component(BuildingDetail)]
pub fn building_detail(props: &BuildingDetailProps) -> Html {
    let building = use_memo((), |_| BuildingInfo::sample());
    let view = building.status_view(props.status);

    let body = if view.shows_memo {
        html! {
            <div class="building-memo">
                <label for="building-memo">{ "Memo" }</label>
                <textarea id="building-memo" rows="3" placeholder="Write a memo." />
            </div>
        }
    } else {
        html! { <p class="building-message">{ view.body.clone() }</p> }
    };

    html! {
        <div class="building-detail">
            <button class="modal-close-btn" onclick={props.on_close.reform(|_| ())}>
                <Icon data={IconData::LUCIDE_X} width="20px" height="20px" />
            </button>

            <div class="building-header">
                <div class="building-image" />
                <div>
                    <h2>{ view.title.clone() }</h2>
                    <p class="building-subtitle">{ view.subtitle.clone() }</p>
                </div>
            </div>

            { body }

            <button
                class={classes!("btn", if view.button_enabled { "btn-primary" } else { "btn-disabled" })}
                disabled={!view.button_enabled}
                onclick={props.on_close.reform(|_| ())}
            >
                { view.button_text }
            </button>
        </div>
    }
}
