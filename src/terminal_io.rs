mod raw;

use self::raw::RawModeGuard;
use crate::input::{EscapeDecoder, KeyEvent};
use crate::io::MenuIo;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::Print,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, BufRead, Read};

/// A `crossterm`-based implementation of `MenuIo` over stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalIo {
    decoder: EscapeDecoder,
}

impl TerminalIo {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Read a single byte with the terminal in raw mode.
fn read_raw_byte() -> Result<Option<u8>> {
    let _raw = RawModeGuard::enter()?;
    let mut byte = [0u8; 1];
    let n = io::stdin().read(&mut byte)?;
    Ok((n == 1).then_some(byte[0]))
}

/// Strip the line ending. Bytes that aren't UTF-8 become U+FFFD, which every
/// prompt then rejects as ordinary bad input.
fn decode_line(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches(['\n', '\r']).to_string()
}

impl MenuIo for TerminalIo {
    fn next_event(&mut self) -> Result<Option<KeyEvent>> {
        self.decoder.next_event(read_raw_byte)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(decode_line(&buf)))
    }

    fn clear_screen(&mut self) -> Result<()> {
        io::stdout()
            .execute(Clear(ClearType::All))?
            .execute(MoveTo(0, 0))?;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        io::stdout().execute(Print(text))?;
        Ok(())
    }
}
