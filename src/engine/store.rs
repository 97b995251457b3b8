//! Subscribable value container.
//!
//! A `Store` holds one immutable snapshot. Every change goes through
//! `update`, which builds the next value from the current one, replaces it
//! wholesale and then notifies subscribers in registration order.
//!
//! ```
//! use connections_engine::engine::Store;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut store = Store::new(1);
//!
//! let sink = Rc::clone(&seen);
//! let id = store.subscribe(move |v: &i32| sink.borrow_mut().push(*v));
//! store.update(|v| v + 1);
//! store.unsubscribe(id);
//! store.update(|v| v + 1);
//!
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! assert_eq!(*store.get(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Handle returned by `Store::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Snapshot container with synchronous change notification.
pub struct Store<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u32,
}

impl<T> Store<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a callback.
    ///
    /// The callback runs immediately with the current value, then once after
    /// every `update`.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        callback(&self.value);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replace the value with `f(current)` and notify.
    ///
    /// Subscribers are notified even when the new value equals the old one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        self.update_with(|value| (f(value), ()));
    }

    /// Like `update`, but `f` also returns a result for the caller.
    pub fn update_with<R>(&mut self, f: impl FnOnce(&T) -> (T, R)) -> R {
        let (next, result) = f(&self.value);
        self.value = next;
        self.notify();
        result
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
