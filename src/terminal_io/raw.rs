use anyhow::Result;
use crossterm::terminal;

/// Raw mode (no line buffering, no echo) for as long as the guard lives.
#[derive(Debug)]
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Reset the terminal mode. Otherwise it gets all wonky, and you have
        // to close it and open a new one. Errors are ignored.
        terminal::disable_raw_mode().ok();
    }
}
