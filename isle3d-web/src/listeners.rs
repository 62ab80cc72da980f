/// Scoped DOM event listener subscriptions
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A registered listener. Dropping it removes the listener from its target.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    /// Register `callback` for `event` on `target`. `passive` is only passed
    /// to the browser when set.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        passive: Option<bool>,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        let function = callback.as_ref().unchecked_ref();
        match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    event, function, &options,
                )?;
            }
            None => target.add_event_listener_with_callback(event, function)?,
        }
        log::trace!("subscribed to {event}");

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::error!("failed to remove {} listener: {:?}", self.event, e);
        } else {
            log::trace!("unsubscribed from {}", self.event);
        }
    }
}
