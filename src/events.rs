//! Status-change notifications and observer registration.
//!
//! Observers register with the engine instance and receive a payload
//! whenever the game status changes value. Registration returns an
//! explicit [`Subscription`] handle that detaches the observer when
//! passed back, so cleanup never depends on closure identity.

use crate::types::GameStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outbound payload broadcast whenever the game status changes value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNotification {
    /// The status the game just settled into.
    pub status: GameStatus,
}

/// Handle identifying a registered observer.
///
/// Returned by [`crate::Game::subscribe`] and consumed by
/// [`crate::Game::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&StatusNotification)>;

/// Observer registry owned by the engine.
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(Subscription, Observer)>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Observer) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        debug!(subscription = id.0, "observer registered");
        id
    }

    /// Removes an observer. Returns false if the handle was already
    /// detached or never issued.
    pub(crate) fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != subscription);
        let removed = self.entries.len() != before;
        debug!(subscription = subscription.0, removed, "observer detached");
        removed
    }

    pub(crate) fn notify(&mut self, status: &GameStatus) {
        let note = StatusNotification {
            status: status.clone(),
        };
        debug!(observers = self.entries.len(), status = ?status, "broadcasting status change");
        for (_, observer) in &mut self.entries {
            observer(&note);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_every_observer() {
        let mut observers = Observers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for _ in 0..3 {
            let seen = Rc::clone(&seen);
            observers.subscribe(Box::new(move |note| {
                seen.borrow_mut().push(note.status.clone());
            }));
        }

        observers.notify(&GameStatus::Draw);
        assert_eq!(seen.borrow().len(), 3);
        assert!(seen.borrow().iter().all(|s| *s == GameStatus::Draw));
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut observers = Observers::new();
        let seen = Rc::new(RefCell::new(0u32));

        let counter = Rc::clone(&seen);
        let sub = observers.subscribe(Box::new(move |_| {
            *counter.borrow_mut() += 1;
        }));

        observers.notify(&GameStatus::InProgress);
        assert!(observers.unsubscribe(sub));
        observers.notify(&GameStatus::Draw);

        assert_eq!(*seen.borrow(), 1);
        // detaching twice is a no-op
        assert!(!observers.unsubscribe(sub));
    }

    #[test]
    fn test_handles_are_unique_across_registrations() {
        let mut observers = Observers::new();
        let a = observers.subscribe(Box::new(|_| {}));
        assert!(observers.unsubscribe(a));

        let b = observers.subscribe(Box::new(|_| {}));
        assert_ne!(a, b);
        assert!(!observers.unsubscribe(a));
        assert!(observers.unsubscribe(b));
    }
}
