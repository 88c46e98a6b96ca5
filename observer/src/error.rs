use thiserror::Error;

/// Why a single observer could not take a notification.
#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("Failed to write notification: {0}")]
    Io(#[from] std::io::Error),
    #[error("Observer channel is disconnected")]
    Disconnected,
    #[error("Observer is already handling a notification")]
    Reentrant,
    #[error("Observer error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// A failed delivery within one broadcast.
#[derive(Error, Debug)]
#[error("Observer at position {position} failed: {error}")]
pub struct DeliveryFailure {
    /// Position of the observer within the broadcast snapshot
    pub position: usize,
    #[source]
    pub error: ObserverError,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("{} of {attempted} observers failed to receive the notification", .failures.len())]
    Delivery { attempted: usize, failures: Vec<DeliveryFailure> },
}

impl NotifyError {
    pub fn failures(&self) -> &[DeliveryFailure] {
        match self {
            NotifyError::Delivery { failures, .. } => failures,
        }
    }

    /// Number of observers the broadcast reached, failed or not
    pub fn attempted(&self) -> usize {
        match self {
            NotifyError::Delivery { attempted, .. } => *attempted,
        }
    }
}
