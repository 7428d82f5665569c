//! Scoped overlay state hook.

use citybuild_core::OverlayState;
use yew::prelude::*;

/// Handle returned by [`use_overlay`].
#[derive(Clone, PartialEq)]
pub struct OverlayHandle<T: Clone + PartialEq + 'static> {
    state: UseStateHandle<OverlayState<T>>,
}

impl<T: Clone + PartialEq + 'static> OverlayHandle<T> {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn selected(&self) -> Option<T> {
        self.state.selected().cloned()
    }

    /// Callback selecting an item and opening the overlay.
    pub fn open_with(&self) -> Callback<T> {
        let state = self.state.clone();
        Callback::from(move |item: T| {
            let mut next = (*state).clone();
            next.open_with(item);
            state.set(next);
        })
    }

    /// Callback opening the overlay without a selection.
    pub fn open(&self) -> Callback<()> {
        let state = self.state.clone();
        Callback::from(move |()| {
            let mut next = (*state).clone();
            next.open();
            state.set(next);
        })
    }

    /// Callback closing the overlay and clearing the selection.
    pub fn close(&self) -> Callback<()> {
        let state = self.state.clone();
        Callback::from(move |()| {
            let mut next = (*state).clone();
            next.close();
            state.set(next);
        })
    }
}

/// Open/close state of one overlay.
#[hook]
pub fn use_overlay<T: Clone + PartialEq + 'static>() -> OverlayHandle<T> {
    let state = use_state(OverlayState::<T>::default);
    OverlayHandle { state }
}
