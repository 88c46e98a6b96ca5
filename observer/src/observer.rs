use crate::ObserverError;
mod console_observer;
mod history_observer;
pub use console_observer::*;
pub use history_observer::*;

/// An Observer is anything that can receive notifications from a [`Subject`](crate::Subject)
pub trait Observer<M = String> {
    /// Receive a notification. Failures are the observer's own concern and must not escape.
    fn receive(&self, message: M);

    /// Receive a notification, reporting failure to the subject instead of handling it.
    /// Observers with a real failure mode should override this.
    fn try_receive(&self, message: M) -> Result<(), ObserverError> {
        self.receive(message);
        Ok(())
    }

    /// Optional display name, used for output and log fields
    fn name(&self) -> Option<&str> { None }
}

// Implementation for function types
impl<F, M> Observer<M> for F
where F: Fn(M)
{
    fn receive(&self, message: M) { self(message) }
}

impl<M> Observer<M> for std::sync::mpsc::Sender<M> {
    fn receive(&self, message: M) {
        let _ = self.send(message); // Ignore send errors
    }

    fn try_receive(&self, message: M) -> Result<(), ObserverError> { self.send(message).map_err(|_| ObserverError::Disconnected) }
}
