// listing/controller.rs - Search/filter controller for the product listing
//
// The controller owns the query state and is only mutated through `&mut self`.
// Requests run as spawned tasks and report back over a channel; the owner
// drives `process_next` (or `run_until_idle`) to apply debounced keywords and
// responses one at a time.
//
// Count and page requests form two trigger groups. Each dispatch bumps the
// group's sequence number and a response is applied only if it carries the
// latest number, so a slow, superseded response can never overwrite newer
// data.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::listing::api::ProductApi;
use crate::listing::config::ListingConfig;
use crate::listing::debounce::Debouncer;
use crate::listing::error::{ListingError, Result};
use crate::listing::model::{Category, CategoryFilter, Product, QueryState, ResultSet, SortKey};
use crate::listing::state::{self, QueryAction};

enum Event {
    Categories(Result<Vec<Category>>),
    Count { seq: u64, result: Result<u64> },
    Page { seq: u64, result: Result<Vec<Product>> },
}

/// Latest sequence number issued for a trigger group
#[derive(Debug, Default)]
struct RequestGroup {
    latest: u64,
    in_flight: bool,
}

impl RequestGroup {
    fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.in_flight = true;
        self.latest
    }

    /// True if `seq` is the response we are waiting for
    fn accept(&mut self, seq: u64) -> bool {
        if seq != self.latest {
            return false;
        }
        self.in_flight = false;
        true
    }
}

pub struct SearchFilterController {
    api: Arc<dyn ProductApi>,
    page_size: u32,
    state: QueryState,
    result: ResultSet,
    categories: Vec<Category>,
    categories_pending: bool,
    debouncer: Debouncer<String>,
    keyword_rx: mpsc::UnboundedReceiver<String>,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    count_group: RequestGroup,
    page_group: RequestGroup,
    discarded: u64,
}

impl SearchFilterController {
    /// Create the controller and fire the initial category, count and page requests
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(api: Arc<dyn ProductApi>, config: &ListingConfig) -> Self {
        let (debouncer, keyword_rx) = Debouncer::new(config.debounce);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut controller = Self {
            api,
            page_size: config.page_size,
            state: QueryState::default(),
            result: ResultSet::default(),
            categories: Vec::new(),
            categories_pending: true,
            debouncer,
            keyword_rx,
            events_tx,
            events_rx,
            count_group: RequestGroup::default(),
            page_group: RequestGroup::default(),
            discarded: 0,
        };

        controller.fetch_categories();
        controller.refresh();
        controller
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn current_result_set(&self) -> &ResultSet {
        &self.result
    }

    /// Empty until loaded, and stays empty if the fetch failed
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Responses dropped because a newer request of the same group was issued
    pub fn discarded_responses(&self) -> u64 {
        self.discarded
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.apply(QueryAction::SelectCategory(category));
    }

    pub fn set_sort_key(&mut self, sort: SortKey) {
        self.apply(QueryAction::SelectSort(sort));
    }

    /// Record a keystroke; the API sees it once typing pauses for the debounce delay
    pub fn set_keyword(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.apply(QueryAction::TypeKeyword(text.clone()));
        self.debouncer.schedule(text);
    }

    /// Move to `page`, which must lie within `1..=total_pages`
    ///
    /// While a count request is outstanding the total is unknown, so only
    /// page 1 is accepted until it arrives.
    pub fn set_page(&mut self, page: u32) -> Result<()> {
        if page > 1 && self.count_group.in_flight {
            return Err(ListingError::CountPending { page });
        }
        let total_pages = self.result.total_pages;
        if page == 0 || page > total_pages.max(1) {
            return Err(ListingError::OutOfRange { page, total_pages });
        }
        self.apply(QueryAction::GoToPage(page));
        Ok(())
    }

    /// Re-issue both requests for the current state
    pub fn refresh(&mut self) {
        self.dispatch_count();
        self.dispatch_page();
    }

    /// Nothing in flight and no keystroke waiting to settle
    pub fn is_idle(&self) -> bool {
        !self.categories_pending
            && !self.count_group.in_flight
            && !self.page_group.in_flight
            && self.state.raw_keyword == self.state.debounced_keyword
    }

    /// Wait for the next settled keyword or response and apply it
    pub async fn process_next(&mut self) {
        tokio::select! {
            Some(keyword) = self.keyword_rx.recv() => {
                // Fired before a newer keystroke restarted the timer
                if keyword != self.state.raw_keyword {
                    tracing::debug!("Dropping superseded keyword {:?}", keyword);
                    return;
                }
                self.apply(QueryAction::SettleKeyword(keyword));
            }
            Some(event) = self.events_rx.recv() => {
                self.handle_event(event);
            }
            else => {}
        }
    }

    pub async fn run_until_idle(&mut self) {
        while !self.is_idle() {
            self.process_next().await;
        }
    }

    fn apply(&mut self, action: QueryAction) {
        let transition = state::reduce(&self.state, action);
        self.state = transition.state;

        if transition.refetch.count {
            self.dispatch_count();
        }
        if transition.refetch.page {
            self.dispatch_page();
        }
    }

    fn fetch_categories(&mut self) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        self.categories_pending = true;

        tokio::spawn(async move {
            let result = api.categories().await;
            let _ = tx.send(Event::Categories(result));
        });
    }

    fn dispatch_count(&mut self) {
        let seq = self.count_group.issue();
        let request = state::count_request(&self.state);
        tracing::debug!("Dispatching count request #{}: {:?}", seq, request);

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.count(&request).await;
            let _ = tx.send(Event::Count { seq, result });
        });
    }

    fn dispatch_page(&mut self) {
        let seq = self.page_group.issue();
        let request = state::page_request(&self.state, self.page_size);
        tracing::debug!("Dispatching page request #{}: {:?}", seq, request);

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.page(&request).await;
            let _ = tx.send(Event::Page { seq, result });
        });
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Categories(result) => {
                self.categories_pending = false;
                match result {
                    Ok(categories) => {
                        tracing::info!("Loaded {} categories", categories.len());
                        self.categories = categories;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load categories: {}", e);
                        self.categories.clear();
                    }
                }
            }
            Event::Count { seq, result } => {
                if !self.count_group.accept(seq) {
                    tracing::debug!("Discarding stale count response #{}", seq);
                    self.discarded += 1;
                    return;
                }
                match result {
                    Ok(count) => {
                        let total_pages = state::total_pages(count, self.page_size);
                        self.result.total_pages = total_pages;
                        self.result.count_error = None;

                        if self.state.page != state::clamp_page(self.state.page, total_pages) {
                            tracing::debug!(
                                "Page {} past new total of {}, clamping",
                                self.state.page,
                                total_pages
                            );
                            self.apply(QueryAction::ClampPage { total_pages });
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Count request failed: {}", e);
                        self.result.count_error = Some(e);
                    }
                }
            }
            Event::Page { seq, result } => {
                if !self.page_group.accept(seq) {
                    tracing::debug!("Discarding stale page response #{}", seq);
                    self.discarded += 1;
                    return;
                }
                match result {
                    Ok(items) => {
                        self.result.items = items;
                        self.result.page_error = None;
                    }
                    Err(e) => {
                        tracing::warn!("Page request failed: {}", e);
                        self.result.page_error = Some(e);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_group_accepts_latest_only() {
        let mut group = RequestGroup::default();
        let first = group.issue();
        let second = group.issue();

        assert!(group.in_flight);
        assert!(!group.accept(first));
        assert!(group.in_flight);
        assert!(group.accept(second));
        assert!(!group.in_flight);
    }
}
