//! Cache-then-notify value holder
//!
//! An `Observable<T>` holds the latest value plus a list of subscribers.
//! Subscribing immediately yields the held value, then every later change.
//! The holder outlives its subscribers: dropping the last `Subscription`
//! keeps the value cached.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Load progress of a fetched value
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(value) => LoadState::Ready(f(value)),
            LoadState::Failed(message) => LoadState::Failed(message.clone()),
        }
    }
}

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

fn lock<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Latest value
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Register a listener. It is called right away with the current value.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let listener: Listener<T> = Arc::new(listener);
        let (id, current) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.value.clone())
        };
        listener(&current);
        Subscription { inner: Arc::downgrade(&self.inner), id }
    }

    /// Replace the value and notify every listener
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutate the value in place and notify every listener
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        // Listeners run after the lock is released so they may read or subscribe.
        let (result, value, listeners) = {
            let mut inner = lock(&self.inner);
            let result = f(&mut inner.value);
            let listeners: Vec<Listener<T>> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (result, inner.value.clone(), listeners)
        };
        for listener in listeners {
            listener(&value);
        }
        result
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Handle returned by `subscribe`; dropping it unsubscribes
pub struct Subscription<T> {
    inner: Weak<Mutex<Inner<T>>>,
    id: u64,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
