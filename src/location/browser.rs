use dioxus::logger::tracing::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::{ChangeListener, LocationProvider, Subscription};

/// A [`LocationProvider`] backed by `window.location.hash`.
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new() -> Self {
        let window = web_sys::window().expect("access to `window`");
        Self { window }
    }
}

impl Default for BrowserLocation {
    fn default() -> Self {
        Self::new()
    }
}

fn current_fragment(window: &Window) -> Option<String> {
    let hash = window.location().hash().unwrap_or_default();
    (!hash.is_empty()).then_some(hash)
}

impl LocationProvider for BrowserLocation {
    fn fragment(&self) -> Option<String> {
        current_fragment(&self.window)
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(err) = self.window.location().set_hash(fragment) {
            error!(?err, "failed to write the location fragment");
        }
    }

    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new({
            let window = window.clone();
            move |_| listener(current_fragment(&window))
        });
        window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
            .expect("can listen for `hashchange`");

        // The closure must outlive the registration; the disposer owns it
        // and detaches the listener when dropped.
        Subscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        })
    }
}
