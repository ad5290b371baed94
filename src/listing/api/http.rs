// listing/api/http.rs - reqwest implementation of the product API
//
// Every endpoint answers `{ "items": ... }`. Transport failures and non-2xx
// statuses become `Network`, undecodable bodies become `Parse`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ProductApi, CATEGORIES_ENDPOINT, COUNT_ENDPOINT, PRODUCTS_ENDPOINT};
use crate::listing::config::ListingConfig;
use crate::listing::error::{ListingError, Result};
use crate::listing::model::{Category, CountRequest, Items, PageRequest, Product};

#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(config: &ListingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ListingError::network("client", e))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ListingError::network(endpoint, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| ListingError::network(endpoint, e))?;

        let envelope: Items<T> =
            serde_json::from_str(&body).map_err(|e| ListingError::parse(endpoint, e))?;

        Ok(envelope.items)
    }
}

pub fn count_query(request: &CountRequest) -> Vec<(&'static str, String)> {
    vec![
        ("category", request.category.to_string()),
        ("contains", request.contains.clone()),
    ]
}

pub fn page_query(request: &PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("skip", request.skip.to_string()),
        ("take", request.take.to_string()),
        ("category", request.category.to_string()),
        ("orderBy", request.order_by.wire_value().to_string()),
        ("contains", request.contains.clone()),
    ]
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn categories(&self) -> Result<Vec<Category>> {
        self.get(CATEGORIES_ENDPOINT, &[]).await
    }

    async fn count(&self, request: &CountRequest) -> Result<u64> {
        self.get(COUNT_ENDPOINT, &count_query(request)).await
    }

    async fn page(&self, request: &PageRequest) -> Result<Vec<Product>> {
        self.get(PRODUCTS_ENDPOINT, &page_query(request)).await
    }
}
