//! Transport for the host shell bridge.
//!
//! Outbound messages go to `window.ReactNativeWebView.postMessage`. Inbound
//! messages arrive as `message` events on `window` (Android) and `document` (iOS).

use std::rc::Rc;

use citybuild_core::{BridgeError, BridgeMessage};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MessageEvent};

const HOST_OBJECT: &str = "ReactNativeWebView";

/// Sends `message` to the host. Without a host it is only logged.
pub fn send(message: &BridgeMessage) {
    let text = match message.encode() {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("failed to encode bridge message: {}", e);
            return;
        }
    };

    let window = gloo::utils::window();
    let host = js_sys::Reflect::get(&window, &JsValue::from_str(HOST_OBJECT))
        .ok()
        .filter(|host| !host.is_undefined() && !host.is_null());

    let Some(host) = host else {
        tracing::info!(message = %text, "host bridge not available");
        return;
    };

    let post = js_sys::Reflect::get(&host, &JsValue::from_str("postMessage"))
        .ok()
        .and_then(|post| post.dyn_into::<js_sys::Function>().ok());

    match post {
        Some(post) => {
            if let Err(e) = post.call1(&host, &JsValue::from_str(&text)) {
                tracing::error!("host postMessage failed: {:?}", e);
            }
        }
        None => tracing::warn!("host bridge has no postMessage function"),
    }
}

/// Active inbound subscription. Dropping it removes the listeners.
pub struct BridgeSubscription {
    _window: EventListener,
    _document: EventListener,
}

/// Delivers every well-formed inbound message to `callback`.
///
/// Malformed payloads are logged and skipped.
pub fn subscribe(callback: impl Fn(BridgeMessage) + 'static) -> BridgeSubscription {
    let handler: Rc<dyn Fn(&Event)> = Rc::new(move |event: &Event| {
        let Some(event) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        match decode_event(event) {
            Ok(message) => {
                tracing::debug!(kind = %message.kind, "bridge message received");
                callback(message);
            }
            Err(e) => tracing::error!("failed to parse bridge message: {}", e),
        }
    });

    let window_handler = Rc::clone(&handler);
    let window_listener = EventListener::new(&gloo::utils::window(), "message", move |event| {
        window_handler(event);
    });
    let document_listener =
        EventListener::new(&gloo::utils::document(), "message", move |event| {
            handler(event);
        });

    BridgeSubscription {
        _window: window_listener,
        _document: document_listener,
    }
}

fn decode_event(event: &MessageEvent) -> Result<BridgeMessage, BridgeError> {
    let text = event.data().as_string().ok_or(BridgeError::NotText)?;
    BridgeMessage::decode(&text)
}
