//! Scoped overlay (modal) host.

use yew::prelude::*;

/// Props for the Modal component.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Owned by the parent.
    pub is_open: bool,
    /// Called when the overlay asks to close.
    pub on_close: Callback<()>,
    /// Modal content.
    pub children: Children,
    /// Whether clicking the backdrop closes the modal.
    #[prop_or(true)]
    pub overlay_click_closes: bool,
    /// Additional CSS classes for the modal container.
    #[prop_or_default]
    pub class: Classes,
}

/// Centered overlay with a backdrop. Renders nothing while closed.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        let overlay_click_closes = props.overlay_click_closes;
        Callback::from(move |_: MouseEvent| {
            if overlay_click_closes {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class={classes!("modal", props.class.clone())} onclick={on_modal_click}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
