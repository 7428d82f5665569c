//! Citybuild Core Library
//!
//! Platform-free logic for the citybuild web client: the snap-point bottom sheet
//! gesture state machine, the shared sheet ratio, the host bridge codec, the
//! goal-setting wizard and the view models rendered by the Yew client.
//!
//! Nothing here touches the DOM. The client implements [`drag::SheetSurface`]
//! for a real element and feeds pointer coordinates in.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod config;
pub mod drag;
pub mod feedback;
pub mod goal_setting;
pub mod onboarding;
pub mod overlay;
pub mod ratio;
pub mod snap;
pub mod todo;
pub mod village;

pub use bridge::{BridgeError, BridgeMessage, InboundCommand};
pub use config::ClientConfig;
pub use drag::{
    DragController, DragSession, ListenerAction, OpenTransition, PointerDown, Release,
    SettleTicket, SheetMode, SheetSurface, SnapChange,
};
pub use feedback::{FeedbackBoard, FeedbackKey, WeeklyFeedback};
pub use goal_setting::{Advance, GoalSettingFormData, GoalSettingWizard, GoalStep, StepError};
pub use onboarding::{OnboardingSlot, OnboardingUpdate, SlotError, SlotRegistration};
pub use overlay::OverlayState;
pub use ratio::{ContextError, SheetRatio};
pub use snap::{SnapConfig, SnapConfigError};
pub use todo::{TodoItem, TodoList};
pub use village::{BuildingInfo, BuildingStatus, BuildingStatusView, SubGoal, VillageSummary};
