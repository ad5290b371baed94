// listing/view.rs - Presentational helpers for the product grid
//
// Turns the controller's result set into what the page draws: product cards
// with a won-formatted price and category name, the category selector
// options, and the pagination widget. `render_listing` lays them out as
// plain text for the CLI.

use rust_decimal::Decimal;

use crate::listing::model::{Category, CategoryFilter, Product, ResultSet};

pub const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 30;

/// One product tile in the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub id: i32,
    pub name: String,
    pub price_label: String,
    pub category_label: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, categories: &[Category]) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price_label: format_price(product.price),
            category_label: category_label(product.category_id, categories),
        }
    }
}

/// Format a price the way ko-KR locale does, e.g. `89,000원`
///
/// At most three fraction digits are kept and trailing zeros are dropped.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp(3).normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut label = String::new();
    if negative {
        label.push('-');
    }
    label.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        label.push('.');
        label.push_str(fraction);
    }
    label.push('원');
    label
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Category name for an id, empty if the list is missing it
pub fn category_label(category_id: i32, categories: &[Category]) -> String {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.name.clone())
        .unwrap_or_default()
}

/// Selector options, always starting with "ALL"
pub fn category_options(categories: &[Category]) -> Vec<(String, CategoryFilter)> {
    std::iter::once(("ALL".to_string(), CategoryFilter::All))
        .chain(
            categories
                .iter()
                .map(|category| (category.name.clone(), CategoryFilter::Id(category.id))),
        )
        .collect()
}

/// State of the pagination widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub total_pages: u32,
}

impl PaginationView {
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self { current, total_pages }
    }

    pub fn pages(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// `< 1 [2] 3 >`, with the arrows only when there is somewhere to go
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        if self.has_prev() {
            parts.push("<".to_string());
        }
        for page in self.pages() {
            if page == self.current {
                parts.push(format!("[{}]", page));
            } else {
                parts.push(page.to_string());
            }
        }
        if self.has_next() {
            parts.push(">".to_string());
        }
        parts.join(" ")
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render the grid, any inline error and the pagination line as text
pub fn render_listing(result: &ResultSet, categories: &[Category], page: u32) -> String {
    let mut out = String::new();

    if let Some(err) = result.error() {
        out.push_str(&format!("! {}\n", err));
    }

    if result.items.is_empty() {
        out.push_str("No products found\n");
    }

    let cards: Vec<ProductCard> = result
        .items
        .iter()
        .map(|product| ProductCard::from_product(product, categories))
        .collect();

    for row in cards.chunks(GRID_COLUMNS) {
        let lines: [Vec<String>; 3] = [
            row.iter().map(|card| truncate(&card.name, CARD_WIDTH)).collect(),
            row.iter().map(|card| card.price_label.clone()).collect(),
            row.iter().map(|card| card.category_label.clone()).collect(),
        ];
        for line in lines {
            let cells: Vec<String> = line
                .iter()
                .map(|cell| format!("{:<width$}", cell, width = CARD_WIDTH))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&PaginationView::new(page, result.total_pages).render());
    out.push('\n');
    out
}
