//! Masked input for passwords and tokens.

use std::io::Write;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;
use termkit_core::error::{Error, Result};

use crate::console::Console;

const MASK: char = '*';

/// What a key press does to the secret being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretKey {
    /// A character was added; echo one mask character.
    Typed,
    /// The last character was removed.
    Erased,
    Submit,
    Abort,
    Ignored,
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Applies one key press to `buffer`.
pub fn handle_secret_key(buffer: &mut String, key: KeyEvent) -> SecretKey {
    if key.kind == KeyEventKind::Release {
        return SecretKey::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => SecretKey::Abort,
        KeyCode::Esc => SecretKey::Abort,
        KeyCode::Enter => SecretKey::Submit,
        KeyCode::Backspace => {
            if buffer.pop().is_some() {
                SecretKey::Erased
            } else {
                SecretKey::Ignored
            }
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            SecretKey::Typed
        }
        _ => SecretKey::Ignored,
    }
}

/// Reads a non-empty secret from the terminal, echoing `*` per character.
///
/// # Errors
///
/// Returns [`Error::SelectionAborted`] on Esc or Ctrl-C, or an error if the
/// terminal cannot be switched to raw mode.
pub fn prompt_secret<W: Write>(console: &mut Console<W>, prompt: &str) -> Result<String> {
    loop {
        console.warn(format!("{prompt}: "))?;
        let secret = read_masked(console)?;
        console.text("\n")?;

        if !secret.trim().is_empty() {
            return Ok(secret);
        }
        console.fail("value required\n")?;
    }
}

fn read_masked<W: Write>(console: &mut Console<W>) -> Result<String> {
    let _guard = RawModeGuard::enable()?;
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match handle_secret_key(&mut buffer, key) {
            SecretKey::Typed => console.text(MASK)?,
            SecretKey::Erased => console.text("\u{8} \u{8}")?,
            SecretKey::Submit => return Ok(buffer),
            SecretKey::Abort => {
                debug!("Secret prompt aborted");
                return Err(Error::SelectionAborted);
            }
            SecretKey::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_erasing() {
        let mut buffer = String::new();
        assert_eq!(handle_secret_key(&mut buffer, key(KeyCode::Char('a'))), SecretKey::Typed);
        assert_eq!(handle_secret_key(&mut buffer, key(KeyCode::Char('b'))), SecretKey::Typed);
        assert_eq!(handle_secret_key(&mut buffer, key(KeyCode::Backspace)), SecretKey::Erased);
        assert_eq!(buffer, "a");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_ignored() {
        let mut buffer = String::new();
        assert_eq!(handle_secret_key(&mut buffer, key(KeyCode::Backspace)), SecretKey::Ignored);
    }

    #[test]
    fn test_submit_and_abort() {
        let mut buffer = "pw".to_string();
        assert_eq!(handle_secret_key(&mut buffer, key(KeyCode::Enter)), SecretKey::Submit);
        assert_eq!(handle_secret_key(&mut buffer, key(KeyCode::Esc)), SecretKey::Abort);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_secret_key(&mut buffer, ctrl_c), SecretKey::Abort);
        assert_eq!(buffer, "pw");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut buffer = String::new();
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_secret_key(&mut buffer, release), SecretKey::Ignored);
        assert!(buffer.is_empty());
    }
}
