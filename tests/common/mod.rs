// common/mod.rs - Shared test utilities for the controller suites
//
// FakeApi is an in-memory ProductApi that:
// 1. Records every count and page request it receives
// 2. Serves pages from the sample catalog, ordered by the requested sort key
// 3. Can be told to fail or to delay individual responses

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use product_listing::fixtures;
use product_listing::listing::model::{Category, CountRequest, PageRequest, Product, SortKey};
use product_listing::listing::{ListingConfig, ListingError, ProductApi, Result};

pub struct FakeApi {
    pub categories: Mutex<Option<Vec<Category>>>,
    pub count: Mutex<u64>,
    pub catalog: Vec<Product>,
    pub fail_count: AtomicBool,
    pub fail_pages: AtomicBool,
    pub count_delays: Mutex<VecDeque<Duration>>,
    pub page_delays: Mutex<VecDeque<Duration>>,
    pub count_requests: Mutex<Vec<CountRequest>>,
    pub page_requests: Mutex<Vec<PageRequest>>,
}

impl FakeApi {
    pub fn new(count: u64) -> Self {
        Self {
            categories: Mutex::new(Some(fixtures::sample_categories())),
            count: Mutex::new(count),
            catalog: fixtures::sample_products(),
            fail_count: AtomicBool::new(false),
            fail_pages: AtomicBool::new(false),
            count_delays: Mutex::new(VecDeque::new()),
            page_delays: Mutex::new(VecDeque::new()),
            count_requests: Mutex::new(Vec::new()),
            page_requests: Mutex::new(Vec::new()),
        }
    }

    /// Category fetch always fails
    pub fn without_categories(count: u64) -> Self {
        let api = Self::new(count);
        *api.categories.lock().unwrap() = None;
        api
    }

    pub fn set_count(&self, count: u64) {
        *self.count.lock().unwrap() = count;
    }

    /// Delay the next count responses, one entry per request
    pub fn delay_counts(&self, delays: &[Duration]) {
        self.count_delays.lock().unwrap().extend(delays.iter().copied());
    }

    /// Delay the next page responses, one entry per request
    pub fn delay_pages(&self, delays: &[Duration]) {
        self.page_delays.lock().unwrap().extend(delays.iter().copied());
    }

    pub fn count_requests(&self) -> Vec<CountRequest> {
        self.count_requests.lock().unwrap().clone()
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn last_page_request(&self) -> PageRequest {
        self.page_requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one page request")
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn categories(&self) -> Result<Vec<Category>> {
        self.categories
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ListingError::network("get-categories", "connection refused"))
    }

    async fn count(&self, request: &CountRequest) -> Result<u64> {
        self.count_requests.lock().unwrap().push(request.clone());
        // The answer reflects the catalog at request time, not at response time
        let count = *self.count.lock().unwrap();
        let delay = self.count_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_count.load(Ordering::SeqCst) {
            return Err(ListingError::parse("get-products-count", "expected integer"));
        }
        Ok(count)
    }

    async fn page(&self, request: &PageRequest) -> Result<Vec<Product>> {
        self.page_requests.lock().unwrap().push(request.clone());
        let delay = self.page_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(ListingError::network("get-products", "503 Service Unavailable"));
        }

        let mut products = self.catalog.clone();
        match request.order_by {
            SortKey::Latest => products.sort_by(|a, b| b.id.cmp(&a.id)),
            SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        }

        Ok(products
            .into_iter()
            .skip(request.skip as usize)
            .take(request.take as usize)
            .collect())
    }
}

pub fn test_config() -> ListingConfig {
    ListingConfig {
        debounce: Duration::from_millis(300),
        page_size: 12,
        ..Default::default()
    }
}
