//! Testing utilities including a mock API implementation.
//!
//! These are useful for testing the pipeline without making real network
//! calls: canned catalog data, failure injection, and call recording.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::error::{ApiError, ApiResult};
use crate::pipeline::catalog::PAGE_SIZE;
use crate::traits::CatalogApi;
use crate::types::{
    ItemDescription, Paging, Picture, ProductDetail, ProductSummary, SearchPage,
};

/// A mock [`CatalogApi`] backed by canned products.
///
/// Search pages are derived from the configured product list using the real
/// page size, so pagination behaves like the live endpoint. Failures can be
/// injected per item id or per search offset, and every call is recorded
/// for assertions.
#[derive(Default)]
pub struct MockApi {
    products: Arc<RwLock<Vec<ProductDetail>>>,
    descriptions: Arc<RwLock<HashMap<String, ItemDescription>>>,
    filters: Arc<RwLock<Vec<serde_json::Value>>>,

    fail_items: Arc<RwLock<HashSet<String>>>,
    fail_descriptions: Arc<RwLock<HashSet<String>>>,
    fail_offsets: Arc<RwLock<HashSet<u64>>>,

    search_calls: Arc<RwLock<Vec<Option<u64>>>>,
    item_calls: Arc<RwLock<Vec<String>>>,
    description_calls: Arc<RwLock<Vec<String>>>,
}

impl MockApi {
    /// Create an empty mock (a seller with zero products).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog (builder pattern). Each product gets a default
    /// description unless one is set explicitly.
    pub fn with_products(self, products: Vec<ProductDetail>) -> Self {
        {
            let mut descriptions = self.descriptions.write().unwrap();
            for product in &products {
                descriptions
                    .entry(product.id.clone())
                    .or_insert_with(|| ItemDescription {
                        plain_text: Some(format!("Description for {}", product.id)),
                        text: None,
                    });
            }
            *self.products.write().unwrap() = products;
        }
        self
    }

    /// Set the seller-level filter taxonomy (builder pattern).
    pub fn with_filters(self, filters: Vec<serde_json::Value>) -> Self {
        *self.filters.write().unwrap() = filters;
        self
    }

    /// Set one item's description (builder pattern).
    pub fn with_description(self, item_id: &str, plain_text: &str) -> Self {
        self.descriptions.write().unwrap().insert(
            item_id.to_string(),
            ItemDescription {
                plain_text: Some(plain_text.to_string()),
                text: None,
            },
        );
        self
    }

    /// Make `/items/{id}` fail for one item (builder pattern).
    pub fn fail_item(self, item_id: &str) -> Self {
        self.fail_items.write().unwrap().insert(item_id.to_string());
        self
    }

    /// Make `/items/{id}/description` fail for one item (builder pattern).
    pub fn fail_description(self, item_id: &str) -> Self {
        self.fail_descriptions
            .write()
            .unwrap()
            .insert(item_id.to_string());
        self
    }

    /// Make the search fail at one offset (builder pattern).
    pub fn fail_offset(self, offset: u64) -> Self {
        self.fail_offsets.write().unwrap().insert(offset);
        self
    }

    /// Summaries for the seeded catalog, as the search endpoint would
    /// report them.
    pub fn summaries(&self) -> Vec<ProductSummary> {
        self.products
            .read()
            .unwrap()
            .iter()
            .map(summary_of)
            .collect()
    }

    /// Offsets requested via search, in call order. `None` is the initial
    /// request without an offset parameter.
    pub fn search_calls(&self) -> Vec<Option<u64>> {
        self.search_calls.read().unwrap().clone()
    }

    /// Item ids requested via the detail endpoint.
    pub fn item_calls(&self) -> Vec<String> {
        self.item_calls.read().unwrap().clone()
    }

    /// Item ids requested via the description endpoint.
    pub fn description_calls(&self) -> Vec<String> {
        self.description_calls.read().unwrap().clone()
    }

    /// Clear recorded calls, keeping the canned data.
    pub fn reset_calls(&self) {
        self.search_calls.write().unwrap().clear();
        self.item_calls.write().unwrap().clear();
        self.description_calls.write().unwrap().clear();
    }

    fn injected_failure() -> ApiError {
        ApiError::Api {
            status: 500,
            message: "injected failure".to_string(),
        }
    }
}

impl Clone for MockApi {
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            descriptions: Arc::clone(&self.descriptions),
            filters: Arc::clone(&self.filters),
            fail_items: Arc::clone(&self.fail_items),
            fail_descriptions: Arc::clone(&self.fail_descriptions),
            fail_offsets: Arc::clone(&self.fail_offsets),
            search_calls: Arc::clone(&self.search_calls),
            item_calls: Arc::clone(&self.item_calls),
            description_calls: Arc::clone(&self.description_calls),
        }
    }
}

#[async_trait]
impl CatalogApi for MockApi {
    async fn search(
        &self,
        _site_id: &str,
        _nickname: &str,
        offset: Option<u64>,
    ) -> ApiResult<SearchPage> {
        self.search_calls.write().unwrap().push(offset);

        let offset = offset.unwrap_or(0);
        if self.fail_offsets.read().unwrap().contains(&offset) {
            return Err(Self::injected_failure());
        }

        let products = self.products.read().unwrap();
        let results: Vec<ProductSummary> = products
            .iter()
            .skip(offset as usize)
            .take(PAGE_SIZE as usize)
            .map(summary_of)
            .collect();

        Ok(SearchPage {
            paging: Paging {
                total: products.len() as u64,
                offset,
                limit: PAGE_SIZE,
            },
            results,
            available_filters: self.filters.read().unwrap().clone(),
        })
    }

    async fn item(&self, item_id: &str) -> ApiResult<ProductDetail> {
        self.item_calls.write().unwrap().push(item_id.to_string());

        if self.fail_items.read().unwrap().contains(item_id) {
            return Err(Self::injected_failure());
        }

        self.products
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == item_id)
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: 404,
                message: format!("item {item_id} not found"),
            })
    }

    async fn item_description(&self, item_id: &str) -> ApiResult<ItemDescription> {
        self.description_calls
            .write()
            .unwrap()
            .push(item_id.to_string());

        if self.fail_descriptions.read().unwrap().contains(item_id) {
            return Err(Self::injected_failure());
        }

        Ok(self
            .descriptions
            .read()
            .unwrap()
            .get(item_id)
            .cloned()
            .unwrap_or(ItemDescription {
                plain_text: None,
                text: None,
            }))
    }
}

fn summary_of(product: &ProductDetail) -> ProductSummary {
    ProductSummary {
        id: product.id.clone(),
        title: product.title.clone(),
        price: product.price,
        permalink: product.permalink.clone(),
        thumbnail: None,
    }
}

/// Build a plausible product detail for tests.
pub fn sample_product(item_id: &str, picture_count: usize) -> ProductDetail {
    ProductDetail {
        id: item_id.to_string(),
        title: Some(format!("Product {item_id}")),
        price: Some(100.0),
        currency_id: Some("ARS".to_string()),
        condition: Some("new".to_string()),
        permalink: Some(format!("https://articulo.mercadolibre.com.ar/{item_id}")),
        sold_quantity: Some(0),
        available_quantity: Some(1),
        date_created: None,
        last_updated: None,
        pictures: (0..picture_count)
            .map(|i| Picture {
                id: Some(format!("{item_id}-pic-{i}")),
                url: Some(format!("http://img/{item_id}/{i}")),
                secure_url: Some(format!("https://img/{item_id}/{i}")),
                size: Some("500x375".to_string()),
                max_size: Some("1200x900".to_string()),
            })
            .collect(),
        attributes: vec![],
    }
}
