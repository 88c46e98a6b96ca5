//! Demonstration driver: two console observers, one subject, one broadcast.

mod config;
pub use config::*;

use dp_observer::{ConsoleObserver, NotifyError, Observer, Subject};
use std::io::Write;
use std::rc::Rc;
use tracing::info;

pub const OBSERVER_NAMES: [&str; 2] = ["observer1", "observer2"];
pub const MESSAGE: &str = "my notification.";

/// Register one console observer per name in [`OBSERVER_NAMES`], each writing to a writer from
/// `make_writer`, and broadcast [`MESSAGE`] to them. Returns the number of observers notified.
pub fn run<W, F>(make_writer: F) -> Result<usize, NotifyError>
where
    W: Write + 'static,
    F: Fn() -> W,
{
    let observers: Vec<Rc<dyn Observer>> =
        OBSERVER_NAMES.iter().map(|name| Rc::new(ConsoleObserver::new(*name, make_writer())) as Rc<dyn Observer>).collect();

    let subject = Subject::new();
    for observer in &observers {
        subject.register(observer);
    }

    let notified = subject.try_notify(MESSAGE)?;
    info!(notified, "demo broadcast complete");
    Ok(notified)
}
