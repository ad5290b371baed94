// listing/state.rs - Pure state transitions for the search/filter controller
//
// Every user event becomes a `QueryAction`; `reduce` returns the next
// `QueryState` and which request groups have to be re-issued. Nothing here
// touches the network or the clock, so every rule is tested directly.

use crate::listing::model::{CategoryFilter, CountRequest, PageRequest, QueryState, SortKey};

/// State changes the controller understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryAction {
    SelectCategory(CategoryFilter),
    SelectSort(SortKey),
    /// Keystroke, only updates the raw keyword
    TypeKeyword(String),
    /// Debounce interval elapsed with this value
    SettleKeyword(String),
    GoToPage(u32),
    /// Total page count shrank below the current page
    ClampPage { total_pages: u32 },
}

/// Which requests a transition invalidated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Refetch {
    pub count: bool,
    pub page: bool,
}

impl Refetch {
    pub fn any(&self) -> bool {
        self.count || self.page
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: QueryState,
    pub refetch: Refetch,
}

/// Fields the count request depends on
#[derive(Clone, Debug, PartialEq, Eq)]
struct CountKey<'a> {
    category: CategoryFilter,
    keyword: &'a str,
}

/// Fields the page request depends on
#[derive(Clone, Debug, PartialEq, Eq)]
struct PageKey<'a> {
    page: u32,
    category: CategoryFilter,
    sort: SortKey,
    keyword: &'a str,
}

fn count_key(state: &QueryState) -> CountKey<'_> {
    CountKey {
        category: state.category,
        keyword: &state.debounced_keyword,
    }
}

fn page_key(state: &QueryState) -> PageKey<'_> {
    PageKey {
        page: state.page,
        category: state.category,
        sort: state.sort,
        keyword: &state.debounced_keyword,
    }
}

/// Apply one action to the current state
///
/// Filter changes (category, settled keyword, sort) always put the user back
/// on page 1 so the page request can never point past the new result count.
pub fn reduce(state: &QueryState, action: QueryAction) -> Transition {
    let mut next = state.clone();

    match action {
        QueryAction::SelectCategory(category) => {
            if category != next.category {
                next.category = category;
                next.page = 1;
            }
        }
        QueryAction::SelectSort(sort) => {
            if sort != next.sort {
                next.sort = sort;
                next.page = 1;
            }
        }
        QueryAction::TypeKeyword(text) => {
            next.raw_keyword = text;
        }
        QueryAction::SettleKeyword(text) => {
            if text != next.debounced_keyword {
                next.debounced_keyword = text;
                next.page = 1;
            }
        }
        QueryAction::GoToPage(page) => {
            next.page = page.max(1);
        }
        QueryAction::ClampPage { total_pages } => {
            next.page = clamp_page(next.page, total_pages);
        }
    }

    let refetch = Refetch {
        count: count_key(state) != count_key(&next),
        page: page_key(state) != page_key(&next),
    };

    Transition { state: next, refetch }
}

/// `ceil(count / page_size)`, zero for an empty result
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Offset of the first item on `page` (1-based)
pub fn skip(page: u32, page_size: u32) -> u32 {
    page_size.saturating_mul(page.saturating_sub(1))
}

/// Keep `page` within `1..=total_pages`; an empty result stays on page 1
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

pub fn count_request(state: &QueryState) -> CountRequest {
    CountRequest {
        category: state.category,
        contains: state.debounced_keyword.clone(),
    }
}

pub fn page_request(state: &QueryState, page_size: u32) -> PageRequest {
    PageRequest {
        skip: skip(state.page, page_size),
        take: page_size,
        category: state.category,
        order_by: state.sort,
        contains: state.debounced_keyword.clone(),
    }
}
