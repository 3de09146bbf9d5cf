use std::cell::RefCell;
use std::rc::Rc;

use super::{ChangeListener, LocationProvider, Subscription};

/// A [`LocationProvider`] that keeps the fragment in memory.
///
/// Used for prerendering and tests, where no browsing context exists.
/// Notification matches the browser's `hashchange` contract: listeners run
/// in registration order, and only when the fragment actually changes.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    state: Rc<RefCell<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    fragment: Option<String>,
    listeners: Vec<(usize, ChangeListener)>,
    next_listener: usize,
}

impl MemoryLocation {
    /// A provider with no fragment set, like a fresh page load.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider already pointing at `fragment`.
    pub fn with_fragment(fragment: &str) -> Self {
        let location = Self::default();
        location.set_fragment(fragment);
        location
    }

    fn notify(&self) {
        // Snapshot before dispatch so a listener may itself navigate.
        let (fragment, listeners): (Option<String>, Vec<ChangeListener>) = {
            let state = self.state.borrow();
            (
                state.fragment.clone(),
                state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect(),
            )
        };
        for listener in listeners {
            listener(fragment.clone());
        }
    }
}

impl LocationProvider for MemoryLocation {
    fn fragment(&self) -> Option<String> {
        self.state.borrow().fragment.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let full = if fragment.starts_with('#') {
            fragment.to_string()
        } else {
            format!("#{fragment}")
        };

        let changed = {
            let mut state = self.state.borrow_mut();
            if state.fragment.as_deref() == Some(full.as_str()) {
                false
            } else {
                state.fragment = Some(full);
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_listener;
            state.next_listener += 1;
            state.listeners.push((id, listener));
            id
        };

        let state = Rc::clone(&self.state);
        Subscription::new(move || {
            state
                .borrow_mut()
                .listeners
                .retain(|(registered, _)| *registered != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording_listener() -> (ChangeListener, Rc<RefCell<Vec<Option<String>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener = {
            let seen = Rc::clone(&seen);
            Rc::new(move |fragment: Option<String>| seen.borrow_mut().push(fragment))
        };
        (listener, seen)
    }

    #[test]
    fn set_fragment_notifies_with_the_new_value() {
        let location = MemoryLocation::new();
        let (listener, seen) = recording_listener();
        let _subscription = location.subscribe(listener);

        location.set_fragment("#/services");

        assert_eq!(location.fragment().as_deref(), Some("#/services"));
        assert_eq!(&*seen.borrow(), &[Some("#/services".to_string())]);
    }

    #[test]
    fn set_fragment_accepts_a_bare_value() {
        let location = MemoryLocation::new();
        location.set_fragment("/contact");
        assert_eq!(location.fragment().as_deref(), Some("#/contact"));
    }

    #[test]
    fn rewriting_the_same_fragment_does_not_notify() {
        let location = MemoryLocation::with_fragment("#/");
        let (listener, seen) = recording_listener();
        let _subscription = location.subscribe(listener);

        location.set_fragment("#/");
        assert!(seen.borrow().is_empty());

        location.set_fragment("#/services");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn dropping_the_subscription_removes_the_listener() {
        let location = MemoryLocation::new();
        let (listener, seen) = recording_listener();
        let subscription = location.subscribe(listener);

        location.set_fragment("#/services");
        assert_eq!(seen.borrow().len(), 1);

        drop(subscription);
        location.set_fragment("#/contact");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn a_listener_may_navigate_during_dispatch() {
        let location = MemoryLocation::new();
        let redirecting = {
            let location = location.clone();
            Rc::new(move |fragment: Option<String>| {
                if fragment.as_deref() == Some("#/old") {
                    location.set_fragment("#/");
                }
            })
        };
        let _subscription = location.subscribe(redirecting);

        location.set_fragment("#/old");
        assert_eq!(location.fragment().as_deref(), Some("#/"));
    }
}
