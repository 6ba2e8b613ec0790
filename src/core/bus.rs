//! In-process publish/subscribe channel for cross-view synchronization.
//!
//! View-models that must react to each other's state changes do so
//! through this bus instead of holding direct references (or relying on
//! ambient global dispatch). Emission is fire-and-forget: the sender
//! returns immediately and zero or more listeners react independently,
//! each typically through its own debouncer.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::models::TrashKind;

/// Broadcast notifications exchanged between view-models.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// A document was soft-deleted from a documents view.
    DocumentDeleted { id: i64, name: String },
    /// A trash entry was restored.
    DocumentRestored {
        id: i64,
        kind: TrashKind,
        name: String,
    },
    /// The calendar event set changed.
    EventsUpdated,
    /// The statistics data was refreshed.
    ChartsDataUpdated {
        events_count: usize,
        documents_count: usize,
        timestamp: DateTime<Utc>,
    },
}

type Listener = Arc<dyn Fn(&AppEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Process-local broadcast channel.
///
/// Cloning is cheap and shares the listener registry; each view-model
/// receives a clone at construction time.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_registry<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        let mut guard = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Register a listener. Listeners are invoked in registration order.
    pub fn subscribe(&self, listener: impl Fn(&AppEvent) + Send + Sync + 'static) -> SubscriberId {
        self.with_registry(|registry| {
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Arc::new(listener)));
            SubscriberId(id)
        })
    }

    #[allow(dead_code)]
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.with_registry(|registry| {
            registry
                .listeners
                .retain(|(listener_id, _)| *listener_id != id.0);
        });
    }

    /// Broadcast an event to every listener registered at this moment.
    ///
    /// The listener list is snapshotted before dispatch (the lock is not
    /// held while listeners run, so a listener may subscribe or emit
    /// freely). A listener registered during dispatch takes effect from
    /// the next emission onward; each listener runs exactly once per
    /// emission.
    pub fn emit(&self, event: AppEvent) {
        let snapshot: Vec<Listener> = self.with_registry(|registry| {
            registry
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        });
        for listener in snapshot {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_listeners_run_in_registration_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            bus.subscribe(move |_| order.lock().unwrap().push(tag));
        }
        bus.emit(AppEvent::EventsUpdated);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_each_listener_runs_once_per_emission() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));
        {
            let count = count.clone();
            bus.subscribe(move |_| *count.lock().unwrap() += 1);
        }
        bus.emit(AppEvent::EventsUpdated);
        bus.emit(AppEvent::EventsUpdated);
        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));
        let id = {
            let count = count.clone();
            bus.subscribe(move |_| *count.lock().unwrap() += 1)
        };
        bus.emit(AppEvent::EventsUpdated);
        bus.unsubscribe(id);
        bus.emit(AppEvent::EventsUpdated);
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_listener_added_during_dispatch_waits_for_next_tick() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));
        {
            let bus_inner = bus.clone();
            let count = count.clone();
            bus.subscribe(move |_| {
                let count = count.clone();
                bus_inner.subscribe(move |_| *count.lock().unwrap() += 1);
            });
        }
        bus.emit(AppEvent::EventsUpdated);
        assert_eq!(*count.lock().unwrap(), 0);
        bus.emit(AppEvent::EventsUpdated);
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_payload_reaches_listeners() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(None));
        {
            let seen = seen.clone();
            bus.subscribe(move |event| *seen.lock().unwrap() = Some(event.clone()));
        }
        bus.emit(AppEvent::DocumentDeleted {
            id: 9,
            name: "notes.txt".to_string(),
        });
        assert_eq!(
            *seen.lock().unwrap(),
            Some(AppEvent::DocumentDeleted {
                id: 9,
                name: "notes.txt".to_string()
            })
        );
    }
}
