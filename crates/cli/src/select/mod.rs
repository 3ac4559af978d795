//! Interactive single-select list.
//!
//! The list takes over the terminal (alternate screen, raw mode and mouse
//! capture) until the user picks an entry or quits.
//!
//! # Controls
//!
//! - Arrow keys or `j`/`k` move the selection, wrapping at both ends
//! - `/` starts filtering; typed text fuzzy-matches the entries
//! - Enter or a mouse click selects
//! - `q`, Esc or Ctrl-C quit

pub mod types;
pub mod ui;

pub use types::{CycleDirection, SelectAction, UiState, ViewportState};
pub use ui::Selector;
