// ============================================================================
// REACTIVITY - Subscriber lists for state changes and one-shot events
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Listeners<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
}

impl<T> Listeners<T> {
    fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    fn add(&self, listener: Listener<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    /// Listeners may subscribe or unsubscribe while being notified, so the
    /// list is copied before any of them runs.
    fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

/// Value with change notifications. Clones share value and subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    listeners: Rc<Listeners<T>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(Listeners::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.value.borrow())
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        self.listeners.add(Rc::new(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self) {
        let current = self.get();
        self.listeners.notify(&current);
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

/// Fire-and-forget event channel with no retained value
pub struct EventBus<E> {
    listeners: Rc<Listeners<E>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(Listeners::new()),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        self.listeners.add(Rc::new(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn emit(&self, event: &E) {
        self.listeners.notify(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let seen = Rc::new(Cell::new(0));
        {
            let seen = seen.clone();
            state.subscribe(move |v| seen.set(*v));
        }

        let clone = state.clone();
        clone.set(5);
        assert_eq!(state.get(), 5);
        assert_eq!(seen.get(), 5);

        state.update(|v| *v += 1);
        assert_eq!(seen.get(), 6);
    }

    #[rstest]
    fn unsubscribed_listeners_stop_firing() {
        let bus = EventBus::<u8>::new();
        let hits = Rc::new(Cell::new(0));
        let id = {
            let hits = hits.clone();
            bus.subscribe(move |_| hits.set(hits.get() + 1))
        };

        bus.emit(&1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(&2);
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[rstest]
    fn listener_may_subscribe_during_notify() {
        let bus = EventBus::<()>::new();
        let inner = bus.clone();
        bus.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        bus.emit(&());
        assert_eq!(bus.subscriber_count(), 2);
    }
}
