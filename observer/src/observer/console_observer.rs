use super::Observer;
use crate::ObserverError;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{Stdout, Write};
use tracing::warn;

/// A ConsoleObserver writes one `<name>: got: <message>` line per notification.
pub struct ConsoleObserver<W: Write = Stdout> {
    name: String,
    writer: RefCell<W>,
}

impl ConsoleObserver<Stdout> {
    /// Create a console observer printing to standard output
    pub fn stdout(name: impl Into<String>) -> Self { Self::new(name, std::io::stdout()) }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self { Self { name: name.into(), writer: RefCell::new(writer) } }

    pub fn name(&self) -> &str { &self.name }

    pub fn into_inner(self) -> W { self.writer.into_inner() }
}

impl<W: Write> std::fmt::Debug for ConsoleObserver<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("ConsoleObserver").field("name", &self.name).finish() }
}

impl<M: Display, W: Write> Observer<M> for ConsoleObserver<W> {
    fn receive(&self, message: M) {
        if let Err(error) = self.try_receive(message) {
            warn!(observer = %self.name, %error, "console observer dropped a notification");
        }
    }

    fn try_receive(&self, message: M) -> Result<(), ObserverError> {
        // a broadcast triggered from inside our own write would otherwise panic on the borrow
        let mut writer = self.writer.try_borrow_mut().map_err(|_| ObserverError::Reentrant)?;
        writeln!(writer, "{}: got: {}", self.name, message)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> Option<&str> { Some(&self.name) }
}
