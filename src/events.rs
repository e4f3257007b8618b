//! Change notification for closet observers.
//!
//! Every state change produces exactly one [`Change`] carrying a new version
//! number. Observers run synchronously, in subscription order, after the
//! change has been applied and (best-effort) persisted.

use std::fmt;

use uuid::Uuid;

use crate::state::ClosetState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Seeded,
    ItemAdded(Uuid),
    ItemUpdated(Uuid),
    ItemDeleted(Uuid),
    ItemFavoriteToggled(Uuid),
    ItemWorn(Uuid),
    ItemWornToday(Uuid),
    OutfitSaved(Uuid),
    OutfitUpdated(Uuid),
    OutfitDeleted(Uuid),
    OutfitFavoriteToggled(Uuid),
    OutfitAddedToToday(Uuid),
    TodayItemAdded(Uuid),
    TodayItemRemoved(Uuid),
    TodayCleared,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    pub version: u64,
    pub kind: ChangeKind,
    /// `false` when the snapshot could not be written; the in-memory state
    /// still reflects the change.
    pub persisted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

pub type Observer = Box<dyn FnMut(&Change, &ClosetState)>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change, &ClosetState) + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, Box::new(observer)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sub, _)| *sub != id);
        self.entries.len() != before
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, change: &Change, state: &ClosetState) {
        for (_, observer) in self.entries.iter_mut() {
            observer(change, state);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
    fn test_subscribe_notify_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        let log = Rc::clone(&seen);
        let first = observers.subscribe(move |change, _| {
            log.borrow_mut().push(("first", change.version));
        });
        let log = Rc::clone(&seen);
        observers.subscribe(move |change, _| {
            log.borrow_mut().push(("second", change.version));
        });

        let state = ClosetState::default();
        let change = Change {
            version: 1,
            kind: ChangeKind::TodayCleared,
            persisted: true,
        };
        observers.notify(&change, &state);
        assert_eq!(*seen.borrow(), vec![("first", 1), ("second", 1)]);

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        assert_eq!(observers.len(), 1);

        observers.notify(&Change { version: 2, ..change }, &state);
        assert_eq!(seen.borrow().last(), Some(&("second", 2)));
        assert_eq!(seen.borrow().len(), 3);
    }
}
