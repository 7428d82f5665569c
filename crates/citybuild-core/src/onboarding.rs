//! Callback slot that lets code outside the view tree update onboarding state.
//!
//! The slot belongs to one provider instance: the provider registers its setter
//! on mount and the returned [`SlotRegistration`] clears it on drop. Updates
//! pushed while nothing is registered are dropped with a warning.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Requested change to onboarding visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingUpdate {
    Set(bool),
    Toggle,
}

impl OnboardingUpdate {
    /// Resolves the update against the current visibility.
    pub fn apply(self, current: bool) -> bool {
        match self {
            Self::Set(value) => value,
            Self::Toggle => !current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("onboarding update pushed before the provider was mounted")]
    Unregistered,
}

type Setter = Rc<dyn Fn(OnboardingUpdate)>;

struct SlotInner {
    setter: RefCell<Option<(u64, Setter)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the onboarding setter of one provider.
#[derive(Clone)]
pub struct OnboardingSlot {
    inner: Rc<SlotInner>,
}

impl Default for OnboardingSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for OnboardingSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for OnboardingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}

impl OnboardingSlot {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SlotInner {
                setter: RefCell::new(None),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Installs `setter`, replacing any previous one.
    pub fn register(&self, setter: impl Fn(OnboardingUpdate) + 'static) -> SlotRegistration {
        let id = self.inner.next_id.get() + 1;
        self.inner.next_id.set(id);
        *self.inner.setter.borrow_mut() = Some((id, Rc::new(setter)));

        SlotRegistration {
            slot: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.inner.setter.borrow().is_some()
    }

    /// Forwards `update` to the registered setter.
    pub fn push(&self, update: OnboardingUpdate) -> Result<(), SlotError> {
        // Clone out of the cell so the setter may push again.
        let setter = self
            .inner
            .setter
            .borrow()
            .as_ref()
            .map(|(_, setter)| Rc::clone(setter));

        match setter {
            Some(setter) => {
                setter(update);
                Ok(())
            }
            None => {
                tracing::warn!(?update, "onboarding slot has no registered provider");
                Err(SlotError::Unregistered)
            }
        }
    }
}

/// Keeps a setter registered; dropping it clears the slot.
pub struct SlotRegistration {
    slot: Weak<SlotInner>,
    id: u64,
}

impl Drop for SlotRegistration {
    fn drop(&mut self) {
        let Some(inner) = self.slot.upgrade() else {
            return;
        };
        let mut setter = inner.setter.borrow_mut();
        if setter.as_ref().is_some_and(|(id, _)| *id == self.id) {
            *setter = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_apply() {
        assert!(OnboardingUpdate::Set(true).apply(false));
        assert!(!OnboardingUpdate::Set(false).apply(true));
        assert!(OnboardingUpdate::Toggle.apply(false));
        assert!(!OnboardingUpdate::Toggle.apply(true));
    }

    #[test]
    fn test_push_before_register_is_noop() {
        let slot = OnboardingSlot::new();
        assert_eq!(slot.push(OnboardingUpdate::Set(true)), Err(SlotError::Unregistered));
    }

    #[test]
    fn test_registration_lifecycle() {
        let slot = OnboardingSlot::new();
        let state = Rc::new(Cell::new(false));

        let registration = {
            let state = Rc::clone(&state);
            slot.register(move |update| state.set(update.apply(state.get())))
        };
        assert!(slot.is_registered());

        slot.push(OnboardingUpdate::Toggle).unwrap();
        assert!(state.get());
        slot.push(OnboardingUpdate::Set(false)).unwrap();
        assert!(!state.get());

        drop(registration);
        assert!(!slot.is_registered());
        assert!(slot.push(OnboardingUpdate::Set(true)).is_err());
        assert!(!state.get());
    }

    #[test]
    fn test_stale_registration_does_not_clear_newer_one() {
        let slot = OnboardingSlot::new();
        let first = slot.register(|_| {});
        let second = slot.register(|_| {});

        drop(first);
        assert!(slot.is_registered());
        drop(second);
        assert!(!slot.is_registered());
    }

    #[test]
    fn test_slots_are_independent() {
        let a = OnboardingSlot::new();
        let b = OnboardingSlot::new();
        let _registration = a.register(|_| {});

        assert!(a.push(OnboardingUpdate::Toggle).is_ok());
        assert!(b.push(OnboardingUpdate::Toggle).is_err());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    /// Feeds raw host payloads through the codec into a registered slot.
    fn deliver(slot: &OnboardingSlot, text: &str) -> bool {
        let Ok(message) = crate::bridge::BridgeMessage::decode(text) else {
            return false;
        };
        match message.command().onboarding_visibility() {
            Some(visible) => slot.push(OnboardingUpdate::Set(visible)).is_ok(),
            None => false,
        }
    }

    #[test]
    fn test_host_messages_drive_registered_state() {
        let slot = OnboardingSlot::new();
        let state = Rc::new(Cell::new(true));
        let _registration = {
            let state = Rc::clone(&state);
            slot.register(move |update| state.set(update.apply(state.get())))
        };

        assert!(!deliver(&slot, "{not json"));
        assert!(state.get());

        assert!(deliver(
            &slot,
            r#"{"type":"SHOW_ONBOARDING","data":{"show":false}}"#
        ));
        assert!(!state.get());

        assert!(!deliver(&slot, r#"{"data":{"show":true}}"#));
        assert!(!state.get());

        assert!(!deliver(&slot, r#"{"type":"SOMETHING_ELSE"}"#));
        assert!(!state.get());

        assert!(deliver(&slot, r#"{"type":"SHOW_ONBOARDING"}"#));
        assert!(state.get());
        assert!(deliver(&slot, r#"{"type":"HIDE_ONBOARDING"}"#));
        assert!(!state.get());
    }
}
