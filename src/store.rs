//! Minimal publish/subscribe cell shared between the UI layer and services.

use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, trace};

type Observer<V> = Arc<dyn Fn(&V) + Send + Sync>;

struct Inner<V> {
    value: V,
    next_id: u64,
    observers: Vec<(u64, Observer<V>)>,
}

/// A mutable cell that broadcasts its value to registered observers on every
/// write, and once on subscription so late subscribers are never without a
/// value.
///
/// Cloning a `Store` clones a handle to the same cell; any holder may read or
/// write it. Writes are wholesale replacements: there is no merge, and the
/// last `set` wins. Observers run synchronously on the writing thread, in
/// registration order, before `set` returns.
pub struct Store<V> {
    inner: Arc<Mutex<Inner<V>>>,
}

impl<V> Clone for Store<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> Store<V> {
    pub fn new(initial: V) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: initial,
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// The most recently set value.
    pub fn get(&self) -> V {
        self.inner.lock().unwrap().value.clone()
    }

    /// Replaces the held value and notifies every currently registered
    /// observer with it before returning.
    ///
    /// The roster is snapshotted at the moment of the write: observers added
    /// or removed by a callback take effect from the next `set` on.
    pub fn set(&self, value: V) {
        let (value, observers) = {
            let mut inner = self.inner.lock().unwrap();
            inner.value = value;
            (inner.value.clone(), inner.observers.clone())
        };
        trace!(observers = observers.len(), "store updated");
        for (_, observer) in &observers {
            observer(&value);
        }
    }

    /// Registers `observer`, immediately invokes it once with the current
    /// value, and returns a deregistration handle.
    ///
    /// Each call is an independent registration: subscribing the same
    /// function twice means it is notified twice per write and each handle
    /// must be deregistered separately.
    pub fn subscribe(&self, observer: impl Fn(&V) + Send + Sync + 'static) -> Subscription<V> {
        let observer: Observer<V> = Arc::new(observer);
        let (id, value) = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Arc::clone(&observer)));
            (id, inner.value.clone())
        };
        debug!(id, "observer subscribed");
        observer(&value);
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Deregistration handle returned by [`Store::subscribe`].
///
/// Dropping the handle does not deregister; removal is explicit via
/// [`unsubscribe`](Subscription::unsubscribe).
pub struct Subscription<V> {
    id: u64,
    inner: Weak<Mutex<Inner<V>>>,
}

impl<V> Subscription<V> {
    /// Removes the registration. Calling this twice, or after the store has
    /// been dropped, is a no-op.
    pub fn unsubscribe(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut inner = inner.lock().unwrap();
        let before = inner.observers.len();
        inner.observers.retain(|(id, _)| *id != self.id);
        if inner.observers.len() < before {
            debug!(id = self.id, "observer unsubscribed");
        }
    }
}
