use std::cmp::Ordering;
use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;
use termkit_core::args::Chooser;
use termkit_core::error::{Error, Result};

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, SelectAction, UiState, ViewportState};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Full-screen list the user picks one entry from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector;

impl Selector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Shows `candidates` under `prompt` and returns the index of the chosen one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectionAborted`] if the user quits, or
    /// [`Error::NoItemFound`] if there is nothing to choose from.
    pub fn select(&self, prompt: &str, candidates: &[String]) -> Result<usize> {
        if candidates.is_empty() {
            return Err(Error::NoItemFound(String::new()));
        }

        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;
        enable_raw_mode()?;

        let _raw_mode_guard = RawModeGuard; // Restores the terminal when dropped
        stdout.execute(EnableMouseCapture)?;

        let (width, height) = terminal::size()?;
        match run_event_loop(prompt, candidates, UiState::new(width, height))? {
            SelectAction::Chosen(index) => {
                debug!("Selected `{}`", candidates[index]);
                Ok(index)
            }
            SelectAction::Quit => Err(Error::SelectionAborted),
        }
    }
}

impl Chooser for Selector {
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<usize> {
        self.select(prompt, candidates)
    }
}

fn run_event_loop(
    prompt: &str,
    candidates: &[String],
    mut ui_state: UiState,
) -> Result<SelectAction> {
    let mut displayed = filter_displayed_indexes(candidates, &ui_state.filter_text);
    redraw_ui(prompt, &ui_state, &displayed, candidates)?;

    let mut down_row: Option<u16> = None;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let mut new_state: Option<UiState> = None;
        let mut direction: Option<CycleDirection> = None;

        match event::read()? {
            Event::Mouse(MouseEvent {
                kind,
                row,
                modifiers,
                ..
            }) if modifiers == KeyModifiers::NONE => match kind {
                MouseEventKind::Down(MouseButton::Left) => down_row = Some(row),
                MouseEventKind::Up(MouseButton::Left) => {
                    let clicked = down_row
                        .take()
                        .and_then(|row| clicked_item(row, &ui_state, &displayed));
                    if let Some(index) = clicked {
                        return Ok(SelectAction::Chosen(index));
                    }
                }
                MouseEventKind::ScrollDown => direction = Some(Down),
                MouseEventKind::ScrollUp => direction = Some(Up),
                _ => {}
            },
            Event::Key(key_event) => {
                let (action, state, key_direction) =
                    handle_key_event(key_event, &ui_state, &displayed);
                if let Some(action) = action {
                    return Ok(action);
                }
                new_state = state;
                direction = key_direction;
            }
            Event::Resize(width, height) => {
                new_state = Some(handle_resize(width, height, &ui_state, displayed.len()));
            }
            _ => {}
        }

        if let Some(direction) = direction {
            let current = new_state.as_ref().unwrap_or(&ui_state);
            new_state = Some(move_selected_index(current, displayed.len(), direction));
        }

        if let Some(state) = new_state {
            if state != ui_state {
                if state.filter_text != ui_state.filter_text {
                    displayed = filter_displayed_indexes(candidates, &state.filter_text);
                }
                ui_state = state;
                redraw_ui(prompt, &ui_state, &displayed, candidates)?;
            }
        }
    }
}

/// Maps a key press to a final action, a new state or a move.
pub(crate) fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    displayed: &[usize],
) -> (
    Option<SelectAction>,
    Option<UiState>,
    Option<CycleDirection>,
) {
    if key_event.kind == KeyEventKind::Release {
        return (None, None, None);
    }

    match key_event.code {
        KeyCode::Up => (None, None, Some(Up)),
        KeyCode::Down => (None, None, Some(Down)),
        KeyCode::Enter => (
            displayed
                .get(ui_state.selected_index)
                .map(|index| SelectAction::Chosen(*index)),
            None,
            None,
        ),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            (Some(SelectAction::Quit), None, None)
        }
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.pop();
            (None, Some(reset_selection(updated_state)), None)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = false;
            updated_state.filter_text.clear();
            (None, Some(reset_selection(updated_state)), None)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.push(c);
            (None, Some(reset_selection(updated_state)), None)
        }
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            (None, Some(updated_state), None)
        }
        KeyCode::Char('k') => (None, None, Some(Up)),
        KeyCode::Char('j') => (None, None, Some(Down)),
        KeyCode::Char('q') | KeyCode::Esc => (Some(SelectAction::Quit), None, None),
        _ => (None, None, None),
    }
}

fn reset_selection(mut ui_state: UiState) -> UiState {
    ui_state.selected_index = 0;
    ui_state.viewport.offset = 0;
    ui_state
}

/// Adapts the viewport to a new terminal size, keeping the selection visible.
pub(crate) fn handle_resize(
    width: u16,
    height: u16,
    ui_state: &UiState,
    displayed_count: usize,
) -> UiState {
    let new_height = height.saturating_sub(UiState::CHROME_ROWS);
    let visible = usize::from(new_height).max(1);
    let mut ui_state = ui_state.clone();
    let mut offset = ui_state.viewport.offset;

    match new_height.cmp(&ui_state.viewport.height) {
        // Growing: show more entries above the selection
        Ordering::Greater => {
            let height_increase = usize::from(new_height - ui_state.viewport.height);
            offset = offset.saturating_sub(height_increase);
        }
        Ordering::Less if ui_state.selected_index >= offset + visible => {
            offset = (ui_state.selected_index + 1 - visible)
                .min(displayed_count.saturating_sub(visible));
        }
        _ => {}
    }

    ui_state.viewport = ViewportState {
        offset,
        height: new_height,
        width,
    };
    ui_state
}

/// Moves the selection one step, wrapping at both ends and scrolling the viewport.
pub(crate) fn move_selected_index(
    ui_state: &UiState,
    displayed_count: usize,
    direction: CycleDirection,
) -> UiState {
    let mut ui_state = ui_state.clone();
    if displayed_count == 0 {
        return ui_state;
    }

    let visible = usize::from(ui_state.viewport.height).max(1);
    let current = ui_state.selected_index.min(displayed_count - 1);
    let new_index = match direction {
        Up if current == 0 => displayed_count - 1,
        Up => current - 1,
        Down => (current + 1) % displayed_count,
    };

    if new_index < ui_state.viewport.offset {
        ui_state.viewport.offset = new_index;
    } else if new_index >= ui_state.viewport.offset + visible {
        ui_state.viewport.offset = new_index + 1 - visible;
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Indexes of the candidates matching `predicate`, in list order.
///
/// A numeric predicate matches entry numbers; anything else is fuzzy-matched
/// against the entry text.
pub(crate) fn filter_displayed_indexes(candidates: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..candidates.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let is_numeric = predicate.parse::<usize>().is_ok();

    candidates
        .iter()
        .enumerate()
        .filter(|(i, candidate)| {
            if is_numeric {
                (i + 1).to_string().contains(predicate)
            } else {
                matcher.fuzzy_match(candidate, predicate).is_some()
            }
        })
        .map(|(i, _)| i)
        .collect()
}

/// The candidate under a clicked screen row, if any.
pub(crate) fn clicked_item(row: u16, ui_state: &UiState, displayed: &[usize]) -> Option<usize> {
    // Row 0 is the header
    let row = usize::from(row.checked_sub(1)?);
    if row >= usize::from(ui_state.viewport.height) {
        return None;
    }
    displayed.get(row + ui_state.viewport.offset).copied()
}

fn redraw_ui(
    prompt: &str,
    ui_state: &UiState,
    displayed: &[usize],
    candidates: &[String],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    print_header(prompt, ui_state, displayed.len())?;
    queue!(stdout, MoveTo(0, 1))?;

    if displayed.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Red),
            Print("No matching items!"),
            SetAttribute(Attribute::Reset),
            MoveToNextLine(1)
        )?;
    } else {
        print_items_with_selection(ui_state, displayed, candidates)?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

fn print_header(prompt: &str, ui_state: &UiState, displayed_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let left_padding = "  ";

    let instructions = if ui_state.is_filtering {
        format!("{prompt}   |   <esc>: Stop Filtering")
    } else {
        format!(
            "{prompt}   |   /: Filter   |   {}/{}   |   q: Quit",
            pad_to_width_of(ui_state.selected_index + 1, displayed_count),
            displayed_count
        )
    };

    let used = left_padding.len() + instructions.chars().count();
    let right_padding = " ".repeat(usize::from(ui_state.viewport.width).saturating_sub(used));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Right-aligns `value` to the width of `max_number`.
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = max_number.to_string().len();
    format!("{:>width$}", value.to_string())
}

fn print_items_with_selection(
    ui_state: &UiState,
    displayed: &[usize],
    candidates: &[String],
) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &ui_state.viewport;

    let visible_items = displayed
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(usize::from(viewport.height));

    for (position, candidate_index) in visible_items {
        let number = pad_to_width_of(candidate_index + 1, candidates.len());
        let content = format!("[{number}] {}", candidates[*candidate_index]);
        let padding = " ".repeat(usize::from(viewport.width).saturating_sub(content.chars().count()));

        if position == ui_state.selected_index {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
            )?;
        }

        queue!(
            stdout,
            Clear(ClearType::CurrentLine),
            Print(content),
            Print(padding),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
            MoveToNextLine(1)
        )?;
    }

    Ok(())
}
