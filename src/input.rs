//! Decoding raw keystroke bytes into menu events.

const ESC: u8 = 27;
const BRACKET: u8 = b'[';
const ARROW_UP: u8 = b'A';
const ARROW_DOWN: u8 = b'B';
const LINE_FEED: u8 = 10;
const CARRIAGE_RETURN: u8 = 13;
const END_OF_TEXT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    MoveUp,
    MoveDown,
    Activate,
    /// Ctrl-C. Raw mode swallows the signal, so it arrives as a byte.
    Interrupt,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    SawEscape,
    SawBracket,
}

/// Turns the `ESC [ A` / `ESC [ B` arrow sequences and Enter into events.
/// Everything else is dropped.
#[derive(Debug, Default)]
pub struct EscapeDecoder {
    state: State,
}

impl EscapeDecoder {
    pub fn feed(&mut self, byte: u8) -> Option<KeyEvent> {
        let (next, event) = match (self.state, byte) {
            (State::Idle, ESC) => (State::SawEscape, None),
            // Raw-mode terminals send CR for Enter; cooked ones send LF.
            (State::Idle, LINE_FEED | CARRIAGE_RETURN) => (State::Idle, Some(KeyEvent::Activate)),
            (State::Idle, END_OF_TEXT) => (State::Idle, Some(KeyEvent::Interrupt)),
            (State::Idle, _) => (State::Idle, None),

            (State::SawEscape, BRACKET) => (State::SawBracket, None),
            (State::SawEscape, _) => (State::Idle, None),

            (State::SawBracket, ARROW_UP) => (State::Idle, Some(KeyEvent::MoveUp)),
            (State::SawBracket, ARROW_DOWN) => (State::Idle, Some(KeyEvent::MoveDown)),
            (State::SawBracket, _) => (State::Idle, None),
        };
        self.state = next;
        event
    }

    /// Pull bytes from `next_byte` until an event is decoded. `Ok(None)` means
    /// the byte source ran dry.
    pub fn next_event<E>(
        &mut self,
        mut next_byte: impl FnMut() -> Result<Option<u8>, E>,
    ) -> Result<Option<KeyEvent>, E> {
        while let Some(byte) = next_byte()? {
            if let Some(event) = self.feed(byte) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}
