//! Fragment-based location handling.
//!
//! The address fragment is the only navigation state in the app. All access
//! to it goes through the [`LocationProvider`] capability, so the same shell
//! runs against `window.location` in the browser and against an in-memory
//! fragment everywhere else (prerendering, tests).

use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::route::Route;

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;
pub use memory::MemoryLocation;

/// Callback invoked with the new raw fragment whenever it changes.
pub type ChangeListener = Rc<dyn Fn(Option<String>)>;

/// Access to the addressable fragment of the browsing context.
pub trait LocationProvider {
    /// The current raw fragment, including the leading `#`, if one is set.
    fn fragment(&self) -> Option<String>;

    /// Write the fragment. The leading `#` is optional.
    fn set_fragment(&self, fragment: &str);

    /// Register a change listener. It stays registered for as long as the
    /// returned [`Subscription`] is alive.
    fn subscribe(&self, listener: ChangeListener) -> Subscription;
}

/// Disposer for a registered change listener: dropping it removes the
/// listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Cheaply cloneable handle to the active [`LocationProvider`].
///
/// This is the navigator handed to components: it reads the current route
/// and rewrites the fragment, which in turn drives [`use_hash_route`].
#[derive(Clone)]
pub struct Location {
    provider: Rc<dyn LocationProvider>,
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.provider, &other.provider)
    }
}

impl Location {
    pub fn new(provider: impl LocationProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }

    /// The provider for the current target: the real browser location on
    /// wasm, an in-memory fragment everywhere else.
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        Self::new(BrowserLocation::new())
    }

    /// The provider for the current target: the real browser location on
    /// wasm, an in-memory fragment everywhere else.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::new(MemoryLocation::new())
    }

    /// The route encoded in the current fragment.
    pub fn current(&self) -> Route {
        Route::from_fragment(self.fragment().as_deref())
    }

    /// Navigate to `target`, prepending the leading `/` if it is missing.
    ///
    /// Writing the fragment is the whole mechanism: the provider's change
    /// notification carries the new route back into the shell.
    pub fn navigate(&self, target: &str) {
        if target.starts_with('/') {
            self.provider.set_fragment(&format!("#{target}"));
        } else {
            self.provider.set_fragment(&format!("#/{target}"));
        }
    }

    pub fn fragment(&self) -> Option<String> {
        self.provider.fragment()
    }

    pub fn set_fragment(&self, fragment: &str) {
        self.provider.set_fragment(fragment)
    }

    pub fn subscribe(&self, listener: ChangeListener) -> Subscription {
        self.provider.subscribe(listener)
    }
}

/// Subscribe the calling component to the current route.
///
/// Registers a single fragment-change listener for the component's lifetime;
/// the subscription guard lives in hook state, so unmounting the component
/// removes the listener. If no fragment is set on first activation, the
/// default `#/` is written so the address bar always shows an explicit
/// route.
pub fn use_hash_route(location: &Location) -> Signal<Route> {
    let route = use_signal({
        let location = location.clone();
        move || location.current()
    });

    use_hook({
        let location = location.clone();
        move || {
            let subscription = location.subscribe(Rc::new(move |fragment| {
                // Signals are `Copy`; rebind mutably inside the `Fn` listener.
                let mut route = route;
                let next = Route::from_fragment(fragment.as_deref());
                if *route.peek() != next {
                    debug!(route = %next, "fragment changed");
                    route.set(next);
                }
            }));
            if location.fragment().is_none() {
                location.set_fragment("#/");
            }
            Rc::new(subscription)
        }
    });

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_writes_the_fragment() {
        let location = Location::new(MemoryLocation::new());
        location.navigate("/services");
        assert_eq!(location.fragment().as_deref(), Some("#/services"));
        assert_eq!(location.current(), Route::Services);
    }

    #[test]
    fn navigate_prepends_a_missing_slash() {
        let location = Location::new(MemoryLocation::new());
        location.navigate("contact");
        assert_eq!(location.fragment().as_deref(), Some("#/contact"));
        assert_eq!(location.current(), Route::Contact);
    }

    #[test]
    fn current_defaults_to_home_without_a_fragment() {
        let location = Location::new(MemoryLocation::new());
        assert_eq!(location.fragment(), None);
        assert_eq!(location.current(), Route::Home);
    }
}
