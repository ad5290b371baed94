// lib.rs - Root module for the product_listing library
//
// The listing module holds the client: models, the search/filter controller
// and the HTTP adapter for the product API. Fixtures provide a shared sample
// catalog for tests.

/// Sample categories and products used across the test suites
pub mod fixtures;

pub mod listing;
