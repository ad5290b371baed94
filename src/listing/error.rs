// listing/error.rs - Error taxonomy for the listing client
//
// Errors are stored in the result set and shown inline, so they are
// cloneable and carry rendered messages instead of source errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// Request could not be sent, timed out, or came back with a non-2xx status
    #[error("Request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    /// Response body was not the expected JSON
    #[error("Could not parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },

    /// Requested page lies outside 1..=total_pages
    #[error("Page {page} is out of range (total pages: {total_pages})")]
    OutOfRange { page: u32, total_pages: u32 },

    /// Page count for the current filters has not arrived yet
    #[error("Page {page} cannot be checked until the result count arrives")]
    CountPending { page: u32 },

    #[error("Invalid value for '{key}': {value}")]
    Config { key: String, value: String },
}

impl ListingError {
    pub fn network(endpoint: &str, err: impl std::fmt::Display) -> Self {
        ListingError::Network {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(endpoint: &str, err: impl std::fmt::Display) -> Self {
        ListingError::Parse {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }
}
