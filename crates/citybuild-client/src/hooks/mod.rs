mod use_drag_to_snap;
mod use_host_bridge;
mod use_onboarding;
mod use_overlay;
mod use_querystring;
mod use_sheet_context;

pub use use_drag_to_snap::*;
pub use use_host_bridge::use_host_bridge;
pub use use_onboarding::*;
pub use use_overlay::*;
pub use use_querystring::*;
pub use use_sheet_context::*;
