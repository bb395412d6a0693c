use crate::input::KeyEvent;
use anyhow::Result;
use std::fmt::Debug;

/// The input/output methods needed by the menu loop.
pub trait MenuIo: Debug {
    /// Block until the next decoded keystroke. `None` once input is exhausted.
    fn next_event(&mut self) -> Result<Option<KeyEvent>>;

    /// Read one line in normal (echoing, line-buffered) mode, without the
    /// trailing newline. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    fn clear_screen(&mut self) -> Result<()>;

    /// Write `text` as-is; newlines are the caller's business.
    fn print(&mut self, text: &str) -> Result<()>;
}
