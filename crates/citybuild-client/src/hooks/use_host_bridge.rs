//! Hook subscribing to inbound host bridge messages.

use citybuild_core::BridgeMessage;
use yew::prelude::*;

use crate::bridge;

/// Subscribes for the lifetime of the component.
///
/// The callback is captured on mount; pass something stable (a dispatcher or
/// slot-backed callback).
#[hook]
pub fn use_host_bridge(on_message: Callback<BridgeMessage>) {
    use_effect_with((), move |_| {
        let subscription = bridge::subscribe(move |message| on_message.emit(message));
        tracing::debug!("host bridge subscribed");
        move || {
            drop(subscription);
            tracing::debug!("host bridge unsubscribed");
        }
    });
}
