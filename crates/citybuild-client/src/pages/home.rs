//! Home page: the city scene with the todo sheet and its overlays.

use citybuild_core::snap::{DEFAULT_INITIAL_SNAP, DEFAULT_SNAP_POINTS};
use citybuild_core::{BridgeMessage, BuildingStatus, OnboardingUpdate, SnapConfig, TodoItem};
use yew::prelude::*;

use crate::bridge;
use crate::components::{
    BottomSheet, BuildingDetail, CityArea, GoalCreation, Modal, TodoDetail, TodoListContent,
    VillageDetail, WeeklyFeedbackContent,
};
use crate::hooks::{SheetContextProvider, use_host_bridge, use_onboarding, use_overlay};

const VILLAGE_NAME: &str = "Harbor Village";
/// Ratio the city screen starts at, before the sheet reports.
const INITIAL_SNAP_RATIO: f64 = DEFAULT_SNAP_POINTS[0];

fn sheet_config(ratio: f64) -> SnapConfig {
    let points = DEFAULT_SNAP_POINTS.to_vec();
    let initial = SnapConfig::default()
        .index_of_ratio(ratio)
        .unwrap_or(DEFAULT_INITIAL_SNAP);
    SnapConfig::new(points, initial).unwrap_or_default()
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let current_snap_ratio = use_state_eq(|| INITIAL_SNAP_RATIO);
    let config = use_memo((), |_| sheet_config(INITIAL_SNAP_RATIO));

    let onboarding = use_onboarding();
    let todo_overlay = use_overlay::<TodoItem>();
    let village_overlay = use_overlay::<AttrValue>();
    let building_overlay = use_overlay::<BuildingStatus>();
    let goal_overlay = use_overlay::<()>();
    let feedback_overlay = use_overlay::<()>();

    // Host commands reach the provider through its slot.
    {
        let slot = onboarding.slot.clone();
        use_host_bridge(Callback::from(move |message: BridgeMessage| {
            let Some(visible) = message.command().onboarding_visibility() else {
                tracing::debug!(kind = %message.kind, "ignoring bridge message");
                return;
            };
            if let Err(e) = slot.push(OnboardingUpdate::Set(visible)) {
                tracing::warn!("onboarding update dropped: {}", e);
            }
        }));
    }

    let on_snap_change = {
        let current_snap_ratio = current_snap_ratio.clone();
        Callback::from(move |ratio: f64| {
            current_snap_ratio.set(ratio);
            bridge::send(&BridgeMessage::snap_changed(ratio));
        })
    };

    let on_onboarding_dismiss = {
        let onboarding = onboarding.clone();
        Callback::from(move |()| onboarding.set_visible(false))
    };

    html! {
        <main class="page home-page">
            <SheetContextProvider current_snap_ratio={*current_snap_ratio}>
                <CityArea
                    village_name={VILLAGE_NAME}
                    on_village_click={village_overlay.open_with()}
                    on_building_click={building_overlay.open_with()}
                    show_onboarding={onboarding.visible}
                    on_onboarding_dismiss={on_onboarding_dismiss}
                    on_feedback_click={feedback_overlay.open()}
                />
                <BottomSheet
                    is_open={true}
                    config={(*config).clone()}
                    on_snap_change={on_snap_change}
                >
                    <TodoListContent
                        on_todo_click={todo_overlay.open_with()}
                        on_create_click={goal_overlay.open()}
                    />
                </BottomSheet>
            </SheetContextProvider>

            <Modal is_open={todo_overlay.is_open()} on_close={todo_overlay.close()}>
                <TodoDetail todo={todo_overlay.selected()} on_close={todo_overlay.close()} />
            </Modal>

            <Modal is_open={village_overlay.is_open()} on_close={village_overlay.close()}>
                <VillageDetail
                    village={village_overlay.selected().unwrap_or_else(|| AttrValue::from(VILLAGE_NAME))}
                    on_close={village_overlay.close()}
                />
            </Modal>

            <Modal is_open={building_overlay.is_open()} on_close={building_overlay.close()}>
                <BuildingDetail
                    status={building_overlay.selected().unwrap_or_default()}
                    on_close={building_overlay.close()}
                />
            </Modal>

            <Modal
                is_open={goal_overlay.is_open()}
                on_close={goal_overlay.close()}
                overlay_click_closes={false}
            >
                <GoalCreation on_close={goal_overlay.close()} />
            </Modal>

            <Modal is_open={feedback_overlay.is_open()} on_close={feedback_overlay.close()}>
                <WeeklyFeedbackContent on_close={feedback_overlay.close()} />
            </Modal>
        </main>
    }
}
