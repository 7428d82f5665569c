//! City scene rendered behind the bottom sheet.

use citybuild_core::BuildingStatus;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::hooks::use_sheet_context;

/// Props for the CityArea component.
#[derive(Properties, PartialEq)]
pub struct CityAreaProps {
    pub village_name: AttrValue,
    pub on_village_click: Callback<AttrValue>,
    pub on_building_click: Callback<BuildingStatus>,
    /// Whether the onboarding overlay is shown above the sheet.
    #[prop_or(false)]
    pub show_onboarding: bool,
    #[prop_or_default]
    pub on_onboarding_dismiss: Option<Callback<()>>,
    /// Opens the weekly feedback review.
    pub on_feedback_click: Callback<()>,
}

fn building_glyph(status: BuildingStatus) -> &'static str {
    match status {
        BuildingStatus::NotBuildable => "🏠",
        BuildingStatus::Buildable => "🏡",
        BuildingStatus::Built => "🏢",
    }
}

/// Full-screen city area. Zooms in as the sheet is lowered.
#[function_component(CityArea)]
pub fn city_area(props: &CityAreaProps) -> Html {
    let sheet = use_sheet_context();

    let on_village = {
        let on_village_click = props.on_village_click.clone();
        let village_name = props.village_name.clone();
        Callback::from(move |_: MouseEvent| on_village_click.emit(village_name.clone()))
    };

    let buildings = BuildingStatus::ALL.iter().map(|&status| {
        let on_building_click = props.on_building_click.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_building_click.emit(status));
        html! {
            <button class={classes!("city-building", format!("building-{status:?}").to_lowercase())} onclick={onclick}>
                <span class="building-glyph">{ building_glyph(status) }</span>
                <span class="building-label">{ status.label() }</span>
            </button>
        }
    });

    let onboarding = if props.show_onboarding {
        let dismiss = props.on_onboarding_dismiss.clone().map(|on_dismiss| {
            html! {
                <button class="onboarding-dismiss" onclick={on_dismiss.reform(|_| ())}>
                    <Icon data={IconData::LUCIDE_X} width="14px" height="14px" />
                </button>
            }
        });
        html! {
            <div
                class="onboarding-overlay"
                style={format!("bottom: {};", sheet.onboarding_bottom_css())}
            >
                <p>{ "Complete today's actions to grow your city!" }</p>
                { for dismiss }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="city-area">
            <button class="village-badge" onclick={on_village}>
                <div class="village-thumb" />
                <div class="village-text">
                    <span class="village-title">{ "My Village" }</span>
                    <span class="village-goal">
                        { props.village_name.clone() }
                        <Icon data={IconData::LUCIDE_CHEVRON_DOWN} width="12px" height="12px" />
                    </span>
                </div>
            </button>

            <div class="points-badge">
                <span>{ "1,330 P" }</span>
                <span class="points-dot" />
            </div>

            <button class="feedback-badge" onclick={props.on_feedback_click.reform(|_| ())}>
                <Icon data={IconData::LUCIDE_MESSAGE_SQUARE} width="14px" height="14px" />
                <span>{ "Weekly feedback" }</span>
            </button>

            <div
                class="city-scene"
                style={format!("transform: scale({:.3});", sheet.zoom_scale())}
            >
                <h2>{ "City" }</h2>
                <p class="zoom-readout">
                    { format!("Map zoom ratio: {:.3}", sheet.map_zoom_ratio()) }
                </p>
                <div class="city-buildings">
                    { for buildings }
                </div>
            </div>

            { onboarding }
        </div>
    }
}
