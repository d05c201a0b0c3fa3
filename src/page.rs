//! Page selection for the three-page gallery book.
//!
//! The book has a fixed number of spreads. Requests for pages outside
//! `1..=PAGE_COUNT` are clamped to the nearest valid page instead of
//! leaving the book blank.

use std::fmt;

pub const PAGE_COUNT: usize = 3;

/// One of the fixed double page spreads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    One,
    Two,
    Three,
}

impl Page {
    pub const ALL: [Page; PAGE_COUNT] = [Page::One, Page::Two, Page::Three];

    /// Exact lookup, `None` when `number` is not a page of the book.
    pub const fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Nearest valid page: anything below 1 is page 1, anything above the
    /// last page is the last page.
    pub const fn clamped(number: i64) -> Self {
        if number <= 1 {
            Self::One
        } else if number >= PAGE_COUNT as i64 {
            Self::Three
        } else {
            Self::Two
        }
    }

    /// 1-based page number.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// 0-based position, used to index per-page tables.
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::One | Self::Two => Self::One,
            Self::Three => Self::Two,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two | Self::Three => Self::Three,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}", self.number())
    }
}

/// Holds the currently selected page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSelector {
    current: Page,
}

impl PageSelector {
    pub fn new(initial: Page) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Select page `number`, clamping out-of-range requests.
    ///
    /// Returns `true` when the selection changed.
    pub fn select(&mut self, number: i64) -> bool {
        let page = Page::clamped(number);
        if Page::from_number(number).is_none() {
            tracing::debug!(requested = number, clamped = %page, "page request out of range");
        }
        if page == self.current {
            return false;
        }
        self.current = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_starts_on_first_page() {
        assert_eq!(PageSelector::default().current(), Page::One);
    }

    #[test]
    fn select_valid_pages() {
        let mut selector = PageSelector::default();
        for page in Page::ALL {
            selector.select(i64::from(page.number()));
            assert_eq!(selector.current(), page);
        }
    }

    #[test]
    fn selecting_current_page_reports_no_change() {
        let mut selector = PageSelector::new(Page::Two);
        assert!(!selector.select(2));
        assert!(!selector.select(2));
        assert_eq!(selector.current(), Page::Two);
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let mut selector = PageSelector::new(Page::Two);
        assert!(selector.select(4));
        assert_eq!(selector.current(), Page::Three);

        assert!(selector.select(0));
        assert_eq!(selector.current(), Page::One);

        assert!(selector.select(i64::MAX));
        assert_eq!(selector.current(), Page::Three);

        assert!(selector.select(-7));
        assert_eq!(selector.current(), Page::One);
    }

    #[test]
    fn clamped_request_on_last_page_keeps_last_page() {
        let mut selector = PageSelector::new(Page::Three);
        assert!(!selector.select(4));
        assert_eq!(selector.current(), Page::Three);
    }

    #[test]
    fn neighbours_stop_at_the_covers() {
        assert_eq!(Page::One.previous(), Page::One);
        assert_eq!(Page::One.next(), Page::Two);
        assert_eq!(Page::Three.next(), Page::Three);
        assert_eq!(Page::Three.previous(), Page::Two);
    }

    #[test]
    fn numbers_and_indices_agree() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::from_number(i64::from(page.number())), Some(*page));
        }
        assert_eq!(Page::from_number(4), None);
    }
}
