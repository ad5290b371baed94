// listing/model/mod.rs - Data models shared by the controller, API client and views
//
// These types mirror the JSON returned by the product API and the query
// parameters it accepts. Wire values (sort keys, the "all categories"
// sentinel) are constants shared with the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::listing::error::ListingError;

/// Number of products shown per page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Wire value meaning "no category constraint"
pub const ALL_CATEGORIES: i32 = -1;

/// Every API response wraps its payload in `{ "items": ... }`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Items<T> {
    pub items: T,
}

/// Product category (fetched once, never mutated)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Product record as returned by `get-products`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: rust_decimal::Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: i32,
}

/// Category selection, `All` travels as `-1`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(i32),
}

impl CategoryFilter {
    pub fn wire_value(&self) -> i32 {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Id(id) => *id,
        }
    }
}

impl From<i32> for CategoryFilter {
    fn from(id: i32) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Id(id)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

impl FromStr for CategoryFilter {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(CategoryFilter::from)
            .map_err(|_| ListingError::Config {
                key: "category".to_string(),
                value: s.to_string(),
            })
    }
}

/// Sort orders the backend recognizes
///
/// Adding a variant here requires matching support in the backend's
/// `orderBy` handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "latest")]
    Latest,
    #[serde(rename = "expensive")]
    PriceHigh,
    #[serde(rename = "cheap")]
    PriceLow,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Latest, SortKey::PriceHigh, SortKey::PriceLow];

    /// Value sent as `orderBy`
    pub fn wire_value(&self) -> &'static str {
        match self {
            SortKey::Latest => "latest",
            SortKey::PriceHigh => "expensive",
            SortKey::PriceLow => "cheap",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Latest => "Latest",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::PriceLow => "Price: Low to High",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.wire_value() == s)
            .ok_or_else(|| ListingError::Config {
                key: "orderBy".to_string(),
                value: s.to_string(),
            })
    }
}

/// Everything that decides which products are requested
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// What the user has typed so far
    pub raw_keyword: String,
    /// Keyword after the debounce interval, the only one sent to the API
    pub debounced_keyword: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            category: CategoryFilter::All,
            sort: SortKey::Latest,
            raw_keyword: String::new(),
            debounced_keyword: String::new(),
        }
    }
}

/// Parameters of `get-products-count`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountRequest {
    pub category: CategoryFilter,
    pub contains: String,
}

/// Parameters of `get-products`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u32,
    pub take: u32,
    pub category: CategoryFilter,
    pub order_by: SortKey,
    pub contains: String,
}

/// What the grid and pagination widget draw
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    pub items: Vec<Product>,
    pub total_pages: u32,
    pub count_error: Option<ListingError>,
    pub page_error: Option<ListingError>,
}

impl ResultSet {
    /// First error to show inline, if any
    pub fn error(&self) -> Option<&ListingError> {
        self.page_error.as_ref().or(self.count_error.as_ref())
    }
}
