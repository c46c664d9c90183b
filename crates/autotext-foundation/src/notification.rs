//! Notification delivery for text and keyboard events.
//!
//! Widgets register against a [`NotificationSource`] handed to them at
//! construction. [`NotificationCenter`] is the in-process implementation;
//! tests and hosts can supply their own.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use autotext_core::ViewId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::keyboard::KeyboardInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationName {
    TextDidChange,
    KeyboardWillShow,
    KeyboardWillHide,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    /// The text of `sender` changed; observers re-measure.
    TextDidChange { sender: ViewId },
    KeyboardWillShow(KeyboardInfo),
    KeyboardWillHide(KeyboardInfo),
}

impl Notification {
    pub fn name(&self) -> NotificationName {
        match self {
            Notification::TextDidChange { .. } => NotificationName::TextDidChange,
            Notification::KeyboardWillShow(_) => NotificationName::KeyboardWillShow,
            Notification::KeyboardWillHide(_) => NotificationName::KeyboardWillHide,
        }
    }

    /// The view that posted the notification. Keyboard notifications are
    /// system-wide and have none.
    pub fn sender(&self) -> Option<ViewId> {
        match self {
            Notification::TextDidChange { sender } => Some(*sender),
            Notification::KeyboardWillShow(_) | Notification::KeyboardWillHide(_) => None,
        }
    }

    pub fn keyboard_info(&self) -> Option<&KeyboardInfo> {
        match self {
            Notification::KeyboardWillShow(info) | Notification::KeyboardWillHide(info) => {
                Some(info)
            }
            Notification::TextDidChange { .. } => None,
        }
    }
}

pub type ObserverId = u64;

pub type ObserverCallback = Rc<dyn Fn(&Notification)>;

/// Source of text and keyboard notifications.
pub trait NotificationSource {
    /// Registers `callback` for `name`. With `sender` set, only notifications
    /// posted by that view are delivered.
    fn add_observer(
        &self,
        name: NotificationName,
        sender: Option<ViewId>,
        callback: ObserverCallback,
    ) -> ObserverId;

    fn remove_observer(&self, id: ObserverId);

    fn post(&self, notification: &Notification);
}

struct Observer {
    id: ObserverId,
    sender: Option<ViewId>,
    callback: ObserverCallback,
}

/// In-process notification center.
///
/// Delivery is synchronous, in registration order, on the posting thread.
/// Observers may add or remove observers and post further notifications
/// from inside a callback.
#[derive(Default)]
pub struct NotificationCenter {
    observers: RefCell<FxHashMap<NotificationName, SmallVec<[Observer; 4]>>>,
    next_id: Cell<ObserverId>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer_count(&self, name: NotificationName) -> usize {
        self.observers
            .borrow()
            .get(&name)
            .map(|observers| observers.len())
            .unwrap_or(0)
    }
}

impl NotificationSource for NotificationCenter {
    fn add_observer(
        &self,
        name: NotificationName,
        sender: Option<ViewId>,
        callback: ObserverCallback,
    ) -> ObserverId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.observers
            .borrow_mut()
            .entry(name)
            .or_default()
            .push(Observer {
                id,
                sender,
                callback,
            });
        id
    }

    fn remove_observer(&self, id: ObserverId) {
        let mut observers = self.observers.borrow_mut();
        for list in observers.values_mut() {
            list.retain(|observer| observer.id != id);
        }
        observers.retain(|_, list| !list.is_empty());
    }

    fn post(&self, notification: &Notification) {
        let sender = notification.sender();
        let callbacks: SmallVec<[ObserverCallback; 4]> = self
            .observers
            .borrow()
            .get(&notification.name())
            .map(|observers| {
                observers
                    .iter()
                    .filter(|observer| observer.sender.is_none() || observer.sender == sender)
                    .map(|observer| Rc::clone(&observer.callback))
                    .collect()
            })
            .unwrap_or_default();
        log::trace!(
            "posting {:?} to {} observer(s)",
            notification.name(),
            callbacks.len()
        );
        for callback in callbacks {
            callback(notification);
        }
    }
}

/// Observer registration that is removed when dropped.
pub struct Subscription {
    source: Weak<dyn NotificationSource>,
    id: ObserverId,
}

impl Subscription {
    pub fn new(
        source: &Rc<dyn NotificationSource>,
        name: NotificationName,
        sender: Option<ViewId>,
        callback: impl Fn(&Notification) + 'static,
    ) -> Self {
        let id = source.add_observer(name, sender, Rc::new(callback));
        Self {
            source: Rc::downgrade(source),
            id,
        }
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.remove_observer(self.id);
        }
    }
}

#[cfg(test)]
#[path = "tests/notification_tests.rs"]
mod tests;
