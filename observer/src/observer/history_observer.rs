use super::Observer;
use std::cell::RefCell;

/// A HistoryObserver records every message it receives, in arrival order.
#[derive(Debug)]
pub struct HistoryObserver<M> {
    name: Option<String>,
    messages: RefCell<Vec<M>>,
}

impl<M> HistoryObserver<M> {
    pub fn new() -> Self { Self { name: None, messages: RefCell::new(Vec::new()) } }

    pub fn named(name: impl Into<String>) -> Self { Self { name: Some(name.into()), messages: RefCell::new(Vec::new()) } }

    /// Drain the recorded messages
    pub fn take(&self) -> Vec<M> { self.messages.borrow_mut().drain(..).collect() }

    pub fn len(&self) -> usize { self.messages.borrow().len() }

    pub fn is_empty(&self) -> bool { self.messages.borrow().is_empty() }
}

impl<M> Default for HistoryObserver<M> {
    fn default() -> Self { Self::new() }
}

impl<M: Clone> HistoryObserver<M> {
    pub fn messages(&self) -> Vec<M> { self.messages.borrow().clone() }
}

impl<M> Observer<M> for HistoryObserver<M> {
    fn receive(&self, message: M) { self.messages.borrow_mut().push(message); }

    fn name(&self) -> Option<&str> { self.name.as_deref() }
}
