//! State of the select widget.

/// Direction to move the selection in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// What the user decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectAction {
    /// Index into the candidate list.
    Chosen(usize),
    Quit,
}

/// The visible window of the list.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Position in the filtered list
    pub selected_index: usize,
    pub viewport: ViewportState,
    pub is_filtering: bool,
    pub filter_text: String,
}

impl UiState {
    /// Rows used by the header and filter lines.
    pub const CHROME_ROWS: u16 = 2;

    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                height: height.saturating_sub(Self::CHROME_ROWS),
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_reserves_chrome_rows() {
        let state = UiState::new(80, 24);
        assert_eq!(state.viewport.height, 22);
        assert_eq!(state.viewport.width, 80);
        assert_eq!(state.selected_index, 0);
        assert!(!state.is_filtering);
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        assert_eq!(UiState::new(10, 1).viewport.height, 0);
    }
}
