use log::debug;

use crate::error::{Error, Result};

const CHOOSE_PROMPT: &str = "choose exact item:";

/// A named value offered by a [`ListProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<V> {
    pub name: String,
    pub value: V,
}

impl<V> ListItem<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Source of items an argument can refer to.
pub trait ListProvider<V> {
    /// Items matching `expression`.
    fn search_items(&self, expression: &str) -> Result<Vec<ListItem<V>>>;

    /// Every available item.
    fn list_items(&self) -> Result<Vec<ListItem<V>>>;
}

/// Asks the user to pick one of several candidates.
pub trait Chooser {
    /// Returns the index into `candidates` of the chosen entry.
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<usize>;
}

/// Resolves `expression` to a single item.
///
/// # Errors
///
/// Returns [`Error::NoItemFound`] when nothing matches, or the chooser's error
/// when several items match and the choice fails.
pub fn select_item<V>(
    provider: &dyn ListProvider<V>,
    chooser: &dyn Chooser,
    expression: &str,
) -> Result<V> {
    let items = provider.search_items(expression)?;
    debug!("Expression `{expression}` matched {} items", items.len());

    if items.is_empty() {
        return Err(Error::NoItemFound(expression.to_string()));
    }
    pick(items, chooser, CHOOSE_PROMPT)
}

/// Lets the user pick from every item of `provider`.
pub fn choose_item<V>(
    provider: &dyn ListProvider<V>,
    chooser: &dyn Chooser,
    prompt: &str,
) -> Result<V> {
    let items = provider.list_items()?;
    if items.is_empty() {
        return Err(Error::NoItemFound(String::new()));
    }
    pick(items, chooser, prompt)
}

fn pick<V>(mut items: Vec<ListItem<V>>, chooser: &dyn Chooser, prompt: &str) -> Result<V> {
    if items.len() == 1 {
        return Ok(items.remove(0).value);
    }

    let names: Vec<String> = items.iter().map(|item| item.name.clone()).collect();
    let index = chooser.choose(prompt, &names)?;
    if index >= items.len() {
        return Err(Error::SelectionAborted);
    }
    Ok(items.swap_remove(index).value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fruits;

    impl ListProvider<u32> for Fruits {
        fn search_items(&self, expression: &str) -> Result<Vec<ListItem<u32>>> {
            Ok(self
                .list_items()?
                .into_iter()
                .filter(|item| item.name.contains(expression))
                .collect())
        }

        fn list_items(&self) -> Result<Vec<ListItem<u32>>> {
            Ok(vec![
                ListItem::new("apple", 1),
                ListItem::new("apricot", 2),
                ListItem::new("banana", 3),
            ])
        }
    }

    struct Fixed {
        index: usize,
        seen: RefCell<Option<(String, Vec<String>)>>,
    }

    impl Fixed {
        fn new(index: usize) -> Self {
            Self {
                index,
                seen: RefCell::new(None),
            }
        }
    }

    impl Chooser for Fixed {
        fn choose(&self, prompt: &str, candidates: &[String]) -> Result<usize> {
            *self.seen.borrow_mut() = Some((prompt.to_string(), candidates.to_vec()));
            Ok(self.index)
        }
    }

    #[test]
    fn test_single_match_skips_chooser() {
        let chooser = Fixed::new(0);
        assert_eq!(select_item(&Fruits, &chooser, "ban").unwrap(), 3);
        assert!(chooser.seen.borrow().is_none());
    }

    #[test]
    fn test_several_matches_ask_the_chooser() {
        let chooser = Fixed::new(1);
        assert_eq!(select_item(&Fruits, &chooser, "ap").unwrap(), 2);

        let seen = chooser.seen.borrow();
        let (prompt, candidates) = seen.as_ref().unwrap();
        assert_eq!(prompt, "choose exact item:");
        assert_eq!(candidates, &["apple", "apricot"]);
    }

    #[test]
    fn test_no_match() {
        let result = select_item(&Fruits, &Fixed::new(0), "cherry");
        match result {
            Err(Error::NoItemFound(exp)) => assert_eq!(exp, "cherry"),
            _ => panic!("Expected NoItemFound"),
        }
    }

    #[test]
    fn test_out_of_range_choice_aborts() {
        let result = select_item(&Fruits, &Fixed::new(5), "ap");
        assert!(matches!(result, Err(Error::SelectionAborted)));
    }

    #[test]
    fn test_choose_item_offers_everything() {
        let chooser = Fixed::new(2);
        assert_eq!(choose_item(&Fruits, &chooser, "fruit:").unwrap(), 3);
        let seen = chooser.seen.borrow();
        assert_eq!(seen.as_ref().unwrap().1.len(), 3);
        assert_eq!(seen.as_ref().unwrap().0, "fruit:");
    }
}
