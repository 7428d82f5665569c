//! Shared sheet ratio context.
//!
//! The owning screen feeds the settled snap ratio in; any descendant can read
//! it together with the derived map zoom ratio.

use citybuild_core::{ContextError, SheetRatio};
use yew::prelude::*;

/// Props for [`SheetContextProvider`].
#[derive(Properties, PartialEq)]
pub struct SheetContextProviderProps {
    /// Ratio of the viewport currently covered by the sheet.
    pub current_snap_ratio: f64,
    pub children: Children,
}

/// Broadcasts the sheet ratio to descendants.
#[function_component(SheetContextProvider)]
pub fn sheet_context_provider(props: &SheetContextProviderProps) -> Html {
    let context = SheetRatio::new(props.current_snap_ratio);

    html! {
        <ContextProvider<SheetRatio> context={context}>
            { props.children.clone() }
        </ContextProvider<SheetRatio>>
    }
}

/// Reads the sheet ratio.
///
/// # Panics
///
/// Panics when no [`SheetContextProvider`] is mounted above the caller.
#[hook]
pub fn use_sheet_context() -> SheetRatio {
    match use_context::<SheetRatio>() {
        Some(context) => context,
        None => panic!("{}", ContextError::MissingProvider("SheetContextProvider")),
    }
}
