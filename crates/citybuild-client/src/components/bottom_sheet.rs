//! Draggable snap-point bottom sheet.

use citybuild_core::snap::sheet_height_css;
use citybuild_core::SnapConfig;
use yew::prelude::*;

use crate::hooks::{use_drag_to_snap, DragToSnapOptions};

/// Props for the BottomSheet component.
#[derive(Properties, PartialEq)]
pub struct BottomSheetProps {
    pub is_open: bool,
    /// Snap configuration (ratios of the viewport height).
    #[prop_or_default]
    pub config: SnapConfig,
    /// Receives the settled ratio after each snap change.
    pub on_snap_change: Callback<f64>,
    #[prop_or_default]
    pub children: Children,
}

/// Fixed panel whose height follows the current snap point.
///
/// Gesture handling lives in [`use_drag_to_snap`]; this component only renders.
#[function_component(BottomSheet)]
pub fn bottom_sheet(props: &BottomSheetProps) -> Html {
    let sheet_ref = use_node_ref();

    let controls = use_drag_to_snap(DragToSnapOptions {
        sheet_ref: sheet_ref.clone(),
        config: props.config.clone(),
        is_open: props.is_open,
        on_snap_change: props.on_snap_change.clone(),
    });

    let height = sheet_height_css(props.config.ratio_at(controls.current_snap_index));

    let sheet_classes = classes!(
        "bottom-sheet",
        (!props.is_open).then_some("sheet-closed"),
        controls.is_dragging.then_some("sheet-dragging"),
    );

    // Close collapses to the lowest snap; visibility stays with the parent.
    let on_close_click = controls.set_snap_index.reform(|_: MouseEvent| 0);

    html! {
        <div
            ref={sheet_ref}
            class={sheet_classes}
            style={format!("height: {height};")}
        >
            <div class="sheet-handle-area" onpointerdown={controls.on_pointer_down.clone()}>
                <div class="sheet-handle" />
            </div>
            <button class="sheet-close-btn" onclick={on_close_click}>{ "×" }</button>
            <div class="sheet-body">
                { props.children.clone() }
            </div>
        </div>
    }
}
