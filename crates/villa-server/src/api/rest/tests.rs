//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use crate::config::ServerConfig;
use serde_json::json;

#[test]
fn test_list_villas_query_defaults() {
    let query: ListVillasQuery = serde_json::from_value(json!({})).unwrap();
    assert!(query.filter_occupancy.is_none());
    assert!(query.search.is_none());
    assert_eq!(query.page_size, 0);
    assert_eq!(query.page_number, 1);
}

#[test]
fn test_list_villas_query_uses_camel_case_names() {
    let query: ListVillasQuery = serde_json::from_value(json!({
        "filterOccupancy": 4,
        "search": "pool",
        "pageSize": 2,
        "pageNumber": 3
    }))
    .unwrap();
    assert_eq!(query.filter_occupancy, Some(4));
    assert_eq!(query.search.as_deref(), Some("pool"));
    assert_eq!(query.page_size, 2);
    assert_eq!(query.page_number, 3);
}

#[test]
fn test_list_villas_query_default_matches_empty_query() {
    let from_serde: ListVillasQuery = serde_json::from_value(json!({})).unwrap();
    let from_default = ListVillasQuery::default();
    assert_eq!(from_default.page_size, from_serde.page_size);
    assert_eq!(from_default.page_number, from_serde.page_number);
    assert_eq!(from_default.page_number, 1);
}

#[test]
fn test_list_villa_numbers_query_includes_villa_by_default() {
    let query: ListVillaNumbersQuery = serde_json::from_value(json!({})).unwrap();
    assert!(query.include_villa);
    assert_eq!(query.page_size, 0);
    assert_eq!(query.page_number, 1);
}

#[test]
fn test_list_villa_numbers_query_can_disable_inclusion() {
    let query: ListVillaNumbersQuery =
        serde_json::from_value(json!({"includeVilla": false})).unwrap();
    assert!(!query.include_villa);
}

#[test]
fn test_health_response_fields() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: "1.0.0".to_string(),
    };

    assert_eq!(response.status, "healthy");
    assert_eq!(response.version, "1.0.0");
}

#[test]
fn test_app_state_shares_config() {
    let mut config = ServerConfig::default();
    config.admin_token = "token-under-test".to_string();
    let state = AppState::new(config);
    assert_eq!(state.config.admin_token, "token-under-test");
}
