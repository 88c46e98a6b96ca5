use crate::{DeliveryFailure, NotifyError, Observer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

/// A unique identifier for a subject, shared by every clone of the handle.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubjectId(usize);

impl From<SubjectId> for usize {
    fn from(id: SubjectId) -> Self { id.0 }
}
impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:x}", self.0) }
}

/// A Subject holds an ordered list of observer references and broadcasts notifications to them.
///
/// The subject does not own its observers. Each entry is a [`Weak`] reference to an observer owned
/// by the caller; an observer whose last [`Rc`] is dropped stops receiving notifications and its
/// entry is pruned.
///
/// Every broadcast iterates a snapshot of the list taken before the first observer runs, so observers
/// may register, deregister or notify on the same subject from within [`Observer::receive`]. Those
/// changes apply from the next broadcast onwards.
pub struct Subject<M = String>(Rc<Inner<M>>);

struct Inner<M> {
    observers: RefCell<Vec<Weak<dyn Observer<M>>>>,
}

impl<M> Clone for Subject<M> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<M> Default for Subject<M> {
    fn default() -> Self { Self::new() }
}

impl<M> std::fmt::Debug for Subject<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject").field("id", &self.id()).field("observers", &self.0.observers.borrow().len()).finish()
    }
}

impl<M> Subject<M> {
    pub fn new() -> Self { Self(Rc::new(Inner { observers: RefCell::new(Vec::new()) })) }

    pub fn id(&self) -> SubjectId { SubjectId(Rc::as_ptr(&self.0) as usize) }

    /// Append an observer to the list. Registering the same observer twice means it is notified twice.
    pub fn register(&self, observer: &Rc<dyn Observer<M>>) {
        // the list borrow must end before logging, since display_name runs observer code
        let len = {
            let mut observers = self.0.observers.borrow_mut();
            self.prune(&mut observers);
            observers.push(Rc::downgrade(observer));
            observers.len()
        };
        debug!(subject = %self.id(), observer = display_name(observer), observers = len, "registered observer");
    }

    /// Remove the first entry referring to `observer`. Returns false (and changes nothing) if it is not registered.
    pub fn deregister(&self, observer: &Rc<dyn Observer<M>>) -> bool {
        let removed = {
            let mut observers = self.0.observers.borrow_mut();
            let position = observers.iter().position(|entry| same_observer(entry, observer));
            if let Some(position) = position {
                observers.remove(position);
            }
            position.map(|position| (position, observers.len()))
        };
        let Some((position, len)) = removed else {
            trace!(subject = %self.id(), observer = display_name(observer), "observer not registered, nothing to deregister");
            return false;
        };
        debug!(subject = %self.id(), observer = display_name(observer), position, observers = len, "deregistered observer");
        true
    }

    pub fn contains(&self, observer: &Rc<dyn Observer<M>>) -> bool {
        self.0.observers.borrow().iter().any(|entry| same_observer(entry, observer))
    }

    /// Number of entries whose observer is still alive
    pub fn len(&self) -> usize {
        let mut observers = self.0.observers.borrow_mut();
        self.prune(&mut observers);
        observers.len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn clear(&self) {
        let mut observers = self.0.observers.borrow_mut();
        debug!(subject = %self.id(), observers = observers.len(), "clearing observers");
        observers.clear();
    }

    /// Upgrade the live entries, dropping the dead ones from the list.
    /// The list borrow ends before this returns, so observers are free to mutate it.
    fn snapshot(&self) -> Vec<Rc<dyn Observer<M>>> {
        let mut observers = self.0.observers.borrow_mut();
        self.prune(&mut observers);
        observers.iter().filter_map(Weak::upgrade).collect()
    }

    fn prune(&self, observers: &mut Vec<Weak<dyn Observer<M>>>) {
        let before = observers.len();
        observers.retain(|entry| entry.strong_count() > 0);
        if observers.len() < before {
            trace!(subject = %self.id(), pruned = before - observers.len(), "pruned dropped observers");
        }
    }
}

impl<M: Clone> Subject<M> {
    /// Broadcast a message to every registered observer, in registration order.
    /// A failing observer is logged and skipped; the remaining observers are still notified.
    pub fn notify(&self, message: impl Into<M>) { let _ = self.broadcast(message.into()); }

    /// Broadcast like [`Subject::notify`], but collect every observer failure.
    /// Returns the number of observers notified.
    pub fn try_notify(&self, message: impl Into<M>) -> Result<usize, NotifyError> {
        let (attempted, failures) = self.broadcast(message.into());
        if failures.is_empty() { Ok(attempted) } else { Err(NotifyError::Delivery { attempted, failures }) }
    }

    fn broadcast(&self, message: M) -> (usize, Vec<DeliveryFailure>) {
        let observers = self.snapshot();
        debug!(subject = %self.id(), observers = observers.len(), "broadcasting notification");

        let mut failures = Vec::new();
        // clone the message for each observer except the last one
        if let Some((last, rest)) = observers.split_last() {
            for (position, observer) in rest.iter().enumerate() {
                self.deliver(position, observer, message.clone(), &mut failures);
            }
            self.deliver(rest.len(), last, message, &mut failures);
        }
        (observers.len(), failures)
    }

    fn deliver(&self, position: usize, observer: &Rc<dyn Observer<M>>, message: M, failures: &mut Vec<DeliveryFailure>) {
        trace!(subject = %self.id(), position, observer = display_name(observer), "delivering notification");
        if let Err(error) = observer.try_receive(message) {
            warn!(subject = %self.id(), position, observer = display_name(observer), %error, "observer failed to receive notification");
            failures.push(DeliveryFailure { position, error });
        }
    }
}

// Weak::as_ptr stays valid for a dropped observer, and the allocation cannot be reused while the entry exists
fn same_observer<M>(entry: &Weak<dyn Observer<M>>, observer: &Rc<dyn Observer<M>>) -> bool {
    std::ptr::addr_eq(entry.as_ptr(), Rc::as_ptr(observer))
}

fn display_name<M>(observer: &Rc<dyn Observer<M>>) -> &str { observer.name().unwrap_or("<anonymous>") }
