use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;
use tracing::Level;

#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt().with_max_level(Level::from_str(&level).unwrap()).with_test_writer().init();
    } else {
        tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init();
    }
}

/// An in-memory writer whose clones share one buffer
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> { String::from_utf8_lossy(&self.0.borrow()).lines().map(str::to_string).collect() }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.0.borrow_mut().write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
