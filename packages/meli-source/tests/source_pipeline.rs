//! Integration tests for the full sync pipeline.
//!
//! Everything runs against `MockApi` and `MemorySink`; no network.

use std::collections::HashSet;

use serde_json::json;

use meli_source::{
    source_nodes, testing::{sample_product, MockApi}, EnrichStage, MemorySink, SourceConfig,
    SourceError, FILTERS_NODE_TYPE, PRODUCT_NODE_TYPE,
};

fn config() -> SourceConfig {
    SourceConfig::new("MLA", "TIENDA_OFICIAL")
}

/// Seed a seller with `n` products of one picture each.
fn seeded_api(n: usize) -> MockApi {
    MockApi::new()
        .with_products((0..n).map(|i| sample_product(&format!("MLA{i:04}"), 1)).collect())
        .with_filters(vec![json!({"id": "category", "name": "Categorías"})])
}

#[tokio::test]
async fn missing_username_aborts_before_any_network_call() {
    let api = seeded_api(5);
    let sink = MemorySink::new();

    let err = source_nodes(&SourceConfig::new("MLA", ""), &api, &sink)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SourceError::MissingConfig { field: "username" }
    ));
    assert!(api.search_calls().is_empty());
    assert_eq!(sink.node_count(), 0);
}

#[tokio::test]
async fn zero_products_creates_no_nodes_at_all() {
    let api = MockApi::new();
    let sink = MemorySink::new();

    let report = source_nodes(&config(), &api, &sink).await.unwrap();

    assert_eq!(report.products_total, 0);
    assert_eq!(report.nodes_created, 0);
    // No taxonomy node either on an empty catalog.
    assert_eq!(sink.node_count(), 0);
}

#[tokio::test]
async fn fifty_products_need_exactly_one_search() {
    let api = seeded_api(50);
    let sink = MemorySink::new();

    let report = source_nodes(&config(), &api, &sink).await.unwrap();

    assert_eq!(api.search_calls(), vec![None]);
    assert_eq!(report.products_imported, 50);
    // 50 product nodes plus the taxonomy node.
    assert_eq!(sink.node_count(), 51);
}

#[tokio::test]
async fn fifty_one_products_paginate_with_offset_fifty() {
    let api = seeded_api(51);
    let sink = MemorySink::new();

    let report = source_nodes(&config(), &api, &sink).await.unwrap();

    assert_eq!(api.search_calls(), vec![None, Some(50)]);
    assert_eq!(report.products_imported, 51);

    let ids: HashSet<String> = sink
        .nodes_of_type(PRODUCT_NODE_TYPE)
        .iter()
        .map(|n| n.content["item_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), 51);
}

#[tokio::test]
async fn one_failing_detail_drops_only_that_product() {
    let api = seeded_api(10).fail_item("MLA0003");
    let sink = MemorySink::new();

    let report = source_nodes(&config(), &api, &sink).await.unwrap();

    assert_eq!(report.products_total, 10);
    assert_eq!(report.products_imported, 9);
    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].item_id, "MLA0003");
    assert_eq!(report.failures[0].stage, EnrichStage::Detail);

    // 9 product nodes plus the taxonomy node.
    assert_eq!(sink.node_count(), 10);
    assert_eq!(sink.nodes_of_type(FILTERS_NODE_TYPE).len(), 1);
}

#[tokio::test]
async fn large_batch_caps_images_at_three() {
    let api = MockApi::new().with_products(
        (0..301).map(|i| sample_product(&format!("MLA{i:04}"), 5)).collect(),
    );
    let sink = MemorySink::new();

    let report = source_nodes(&config(), &api, &sink).await.unwrap();
    assert_eq!(report.products_imported, 301);

    for node in sink.nodes_of_type(PRODUCT_NODE_TYPE) {
        let images = node.content["item_images"].as_array().unwrap();
        assert!(images.len() <= 3, "expected at most 3 images, got {}", images.len());
        // The thumbnail survives the cap.
        assert!(!node.content["item_thumbnail"].is_null());
    }
}

#[tokio::test]
async fn reruns_derive_identical_node_identities() {
    let api = seeded_api(53);
    let first = MemorySink::new();
    let second = MemorySink::new();

    source_nodes(&config(), &api, &first).await.unwrap();
    api.reset_calls();
    source_nodes(&config(), &api, &second).await.unwrap();

    let identities = |sink: &MemorySink| -> HashSet<(String, String)> {
        sink.nodes()
            .into_iter()
            .map(|n| (n.id, n.content_digest))
            .collect()
    };

    assert_eq!(identities(&first), identities(&second));
    assert_eq!(first.node_count(), second.node_count());
}

#[tokio::test]
async fn whole_catalog_failure_aborts_the_run() {
    let api = seeded_api(120).fail_offset(50);
    let sink = MemorySink::new();

    let err = source_nodes(&config(), &api, &sink).await.unwrap_err();

    assert!(matches!(err, SourceError::Catalog(_)));
    assert_eq!(sink.node_count(), 0);
}

#[tokio::test]
async fn taxonomy_node_carries_the_sellers_filters() {
    let api = seeded_api(2);
    let sink = MemorySink::new();

    source_nodes(&config(), &api, &sink).await.unwrap();

    let taxonomy = sink.nodes_of_type(FILTERS_NODE_TYPE);
    assert_eq!(taxonomy.len(), 1);
    assert_eq!(taxonomy[0].content[0]["id"], json!("category"));
}
