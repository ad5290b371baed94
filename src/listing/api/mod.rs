// listing/api/mod.rs - Product API seam
//
// The controller only talks to the backend through `ProductApi`, so tests
// can swap in an in-memory implementation and the HTTP client stays a thin
// adapter over the three GET endpoints.

use async_trait::async_trait;

use crate::listing::error::Result;
use crate::listing::model::{Category, CountRequest, PageRequest, Product};

pub mod http;

pub use http::HttpProductApi;

pub const CATEGORIES_ENDPOINT: &str = "get-categories";
pub const COUNT_ENDPOINT: &str = "get-products-count";
pub const PRODUCTS_ENDPOINT: &str = "get-products";

#[async_trait]
pub trait ProductApi: Send + Sync {
    /// All categories, fetched once per controller
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Number of products matching the category and keyword
    async fn count(&self, request: &CountRequest) -> Result<u64>;

    /// One page of products in the requested order
    async fn page(&self, request: &PageRequest) -> Result<Vec<Product>>;
}
