use std::collections::HashSet;

use crate::constants::{CARD_COLOR_COUNT, SCROLL_THRESHOLD};
use crate::types::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCard {
    pub path: String,
    pub title: String,
    pub created: String,
    pub views: u64,
    pub color: usize,
}

/// Cursor and de-duplication for the infinite page list.
#[derive(Debug, Clone, Default)]
pub struct PagesState {
    offset: usize,
    seen: HashSet<String>,
    last_count: usize,
    color: usize,
    loading: bool,
    ready: bool,
}

impl PagesState {
    #[cfg(test)]
    fn offset(&self) -> usize {
        self.offset
    }

    #[cfg(test)]
    fn is_exhausted(&self) -> bool {
        !self.seen.is_empty() && self.last_count == 0
    }

    /// Opens the list for loading once the account is known.
    pub fn set_ready(&mut self) {
        self.ready = true;
    }

    /// No load may start: the account is not known yet or a load is running.
    pub fn is_blocked(&self) -> bool {
        !self.ready || self.loading
    }

    /// Marks a load as started and returns the offset to fetch from, or
    /// `None` before the account is known and while a previous load is
    /// still running.
    pub fn begin_load(&mut self) -> Option<usize> {
        if self.is_blocked() {
            return None;
        }
        self.loading = true;
        Some(self.offset)
    }

    /// Advances the cursor by the fetched count and returns cards for the
    /// paths not shown yet.
    pub fn finish_load(&mut self, pages: Vec<Page>) -> Vec<PageCard> {
        self.loading = false;
        self.offset += pages.len();
        self.last_count = pages.len();

        let mut cards = vec![];
        for page in pages {
            let path = page.path.to_lowercase();
            if !self.seen.insert(path.clone()) {
                continue;
            }
            self.color = (self.color + 1) % CARD_COLOR_COUNT;
            cards.push(PageCard {
                path,
                title: page.title,
                created: page.created,
                views: page.views,
                color: self.color,
            });
        }
        cards
    }

    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn should_autoload(&self, scroll_top: i32, viewport_height: i32, page_height: i32) -> bool {
        scroll_top + viewport_height >= page_height - SCROLL_THRESHOLD && self.last_count > 0 && !self.is_blocked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> Page {
        Page { path: path.to_string(), title: path.to_uppercase(), ..Page::default() }
    }

    fn ready_state() -> PagesState {
        let mut state = PagesState::default();
        state.set_ready();
        state
    }

    #[test]
    fn no_load_before_account_is_known() {
        let mut state = PagesState::default();
        assert!(state.is_blocked());
        assert_eq!(state.begin_load(), None);
        assert!(!state.should_autoload(900, 100, 1000));

        state.set_ready();
        assert!(!state.is_blocked());
        assert_eq!(state.begin_load(), Some(0));
        assert!(state.is_blocked());
    }

    #[test]
    fn in_flight_load_blocks_another() {
        let mut state = ready_state();
        assert_eq!(state.begin_load(), Some(0));
        assert_eq!(state.begin_load(), None);
        state.fail_load();
        assert_eq!(state.begin_load(), Some(0));
    }

    #[test]
    fn duplicates_are_not_rendered_twice() {
        let mut state = ready_state();
        state.begin_load();
        let first = state.finish_load(vec![page("a"), page("b")]);
        assert_eq!(first.len(), 2);

        assert_eq!(state.begin_load(), Some(2));
        let second = state.finish_load(vec![page("B"), page("c")]);
        assert_eq!(second.iter().map(|c| c.path.as_str()).collect::<Vec<_>>(), vec!["c"]);
        assert_eq!(state.offset(), 4);
    }

    #[test]
    fn colors_cycle_from_one() {
        let mut state = ready_state();
        state.begin_load();
        let cards = state.finish_load(vec![page("a"), page("b"), page("c"), page("d")]);
        assert_eq!(cards.iter().map(|c| c.color).collect::<Vec<_>>(), vec![1, 2, 0, 1]);
    }

    #[test]
    fn empty_fetch_stops_autoload() {
        let mut state = ready_state();
        assert!(!state.should_autoload(900, 100, 1000));

        state.begin_load();
        state.finish_load(vec![page("a")]);
        assert!(state.should_autoload(900, 100, 1000));
        assert!(state.should_autoload(850, 100, 1000));
        assert!(!state.should_autoload(700, 100, 1000));

        state.begin_load();
        assert!(!state.should_autoload(900, 100, 1000));
        state.finish_load(vec![]);
        assert!(!state.should_autoload(900, 100, 1000));
        assert!(state.is_exhausted());
    }
}
