//! Onboarding visibility context.
//!
//! [`OnboardingProvider`] owns the visibility state and registers it with an
//! [`OnboardingSlot`] so callers outside the render tree (bridge listeners)
//! can push updates. The registration is dropped with the provider.

use std::rc::Rc;

use citybuild_core::{ContextError, OnboardingSlot, OnboardingUpdate};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct OnboardingState {
    visible: bool,
}

impl Reducible for OnboardingState {
    type Action = OnboardingUpdate;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let visible = action.apply(self.visible);
        if visible == self.visible {
            return self;
        }
        Rc::new(Self { visible })
    }
}

/// Value exposed by [`use_onboarding`].
#[derive(Clone, PartialEq)]
pub struct OnboardingContext {
    pub visible: bool,
    /// Applies an update from inside the tree.
    pub update: Callback<OnboardingUpdate>,
    /// Slot for updates from outside the tree.
    pub slot: OnboardingSlot,
}

impl OnboardingContext {
    pub fn set_visible(&self, visible: bool) {
        self.update.emit(OnboardingUpdate::Set(visible));
    }
}

/// Props for [`OnboardingProvider`].
#[derive(Properties, PartialEq)]
pub struct OnboardingProviderProps {
    pub children: Children,
    /// Visibility before any update arrives.
    #[prop_or(false)]
    pub initial: bool,
}

/// Provides onboarding visibility to descendants.
#[function_component(OnboardingProvider)]
pub fn onboarding_provider(props: &OnboardingProviderProps) -> Html {
    let state = {
        let visible = props.initial;
        use_reducer_eq(move || OnboardingState { visible })
    };
    let slot = use_memo((), |_| OnboardingSlot::new());

    // Register on mount, clear on unmount.
    {
        let slot = (*slot).clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let registration = slot.register(move |update| dispatcher.dispatch(update));
            tracing::debug!("onboarding slot registered");
            move || drop(registration)
        });
    }

    let update = {
        let dispatcher = state.dispatcher();
        Callback::from(move |update: OnboardingUpdate| dispatcher.dispatch(update))
    };

    let context = OnboardingContext {
        visible: state.visible,
        update,
        slot: (*slot).clone(),
    };

    html! {
        <ContextProvider<OnboardingContext> context={context}>
            { props.children.clone() }
        </ContextProvider<OnboardingContext>>
    }
}

/// Reads the onboarding context.
///
/// # Panics
///
/// Panics when no [`OnboardingProvider`] is mounted above the caller.
#[hook]
pub fn use_onboarding() -> OnboardingContext {
    match use_context::<OnboardingContext>() {
        Some(context) => context,
        None => panic!("{}", ContextError::MissingProvider("OnboardingProvider")),
    }
}
