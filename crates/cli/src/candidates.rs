//! A list provider over plain text entries.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;
use termkit_core::args::{ListItem, ListProvider};
use termkit_core::error::Result;

/// Entries searched by fuzzy match, best matches first.
///
/// An entry equal to the expression (ignoring case) is returned on its own.
pub struct LineList {
    lines: Vec<String>,
    matcher: SkimMatcherV2,
}

impl LineList {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            matcher: SkimMatcherV2::default(),
        }
    }

    fn item(line: &str) -> ListItem<String> {
        ListItem::new(line, line.to_string())
    }
}

impl ListProvider<String> for LineList {
    fn search_items(&self, expression: &str) -> Result<Vec<ListItem<String>>> {
        if let Some(exact) = self
            .lines
            .iter()
            .find(|line| line.eq_ignore_ascii_case(expression))
        {
            return Ok(vec![Self::item(exact)]);
        }

        Ok(self
            .lines
            .iter()
            .filter_map(|line| {
                self.matcher
                    .fuzzy_match(line, expression)
                    .map(|score| (score, line))
            })
            .sorted_by(|(a, _), (b, _)| b.cmp(a))
            .map(|(_, line)| Self::item(line))
            .collect())
    }

    fn list_items(&self) -> Result<Vec<ListItem<String>>> {
        Ok(self.lines.iter().map(|line| Self::item(line)).collect())
    }
}
