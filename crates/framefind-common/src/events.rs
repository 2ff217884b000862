//! Single-threaded listener registry.
//!
//! `Emitter<T>` delivers each value synchronously to every listener in
//! registration order. Nothing is buffered: a listener added after a
//! `fire` never sees that value. Dropping the returned `Subscription`
//! removes the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

pub struct Emitter<T> {
    inner: Rc<RefCell<Listeners<T>>>,
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener. It stays registered while the returned
    /// `Subscription` is alive.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut listeners = self.inner.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<Listeners<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().entries.retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Deliver `value` to every current listener. Returns how many were called.
    ///
    /// Listeners may subscribe or unsubscribe while being called; changes
    /// take effect from the next `fire`.
    pub fn fire(&self, value: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in &snapshot {
            listener(value);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a registered listener. Unsubscribes on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unsubscribe now.
    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

/// A bag of subscriptions released together.
#[derive(Default)]
pub struct SubscriptionStore {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Release every held subscription, in the order they were added.
    pub fn clear(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
