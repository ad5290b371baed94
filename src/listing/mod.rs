// listing/mod.rs - Root module for the product listing client
//
// Architecture:
// - model/: Wire types and query state
// - state.rs: Pure reducers and page math
// - debounce.rs: Cancellable delayed delivery for keystrokes
// - api/: Product API trait and its HTTP client
// - controller.rs: Search/filter controller tying the above together
// - view.rs: Cards, pagination and text rendering
// - config.rs / error.rs: Configuration and error taxonomy

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod model;
pub mod state;
pub mod view;

// Re-export the main entry points for convenience
pub use api::{HttpProductApi, ProductApi};
pub use config::ListingConfig;
pub use controller::SearchFilterController;
pub use error::{ListingError, Result};
