//! Request and response models for the HTTP server

use ipcheck_core::prelude::*;
use serde::Serialize;

/// Message returned when the `items` parameter is missing or empty
pub const NO_ITEMS_MESSAGE: &str =
    "No items provided. Please provide IP addresses using ?items=ip1,ip2,ip3";

/// Usage hint returned alongside [`NO_ITEMS_MESSAGE`]
pub const USAGE: &str = "/?items=ip1,ip2,ip3";

/// Query string accepted by the item endpoints
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ItemsQuery {
    /// Comma-separated IP addresses
    pub items: Option<String>,
}

impl ItemsQuery {
    /// Pick `items` out of decoded query pairs. When the parameter is
    /// repeated the last value wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let items = pairs
            .into_iter()
            .filter(|(key, _)| key == "items")
            .map(|(_, value)| value)
            .last();
        Self { items }
    }
}

/// Body of the classification endpoint
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Empty on success, a usage message when no items were provided
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
    /// Raw `items` value, echoed back
    pub items: String,
    pub total_items: usize,
    #[serde(flatten)]
    pub counts: CategoryCounts,
    pub results: Vec<ClassifiedItem>,
}

impl ClassifyResponse {
    pub fn no_items() -> Self {
        Self {
            error: NO_ITEMS_MESSAGE.to_string(),
            usage: Some(USAGE),
            items: String::new(),
            total_items: 0,
            counts: CategoryCounts::default(),
            results: Vec::new(),
        }
    }
}

impl From<Batch> for ClassifyResponse {
    fn from(batch: Batch) -> Self {
        match batch {
            Batch::NoItems => Self::no_items(),
            Batch::Processed(report) => Self {
                error: String::new(),
                usage: None,
                total_items: report.total_items(),
                items: report.items,
                counts: report.counts,
                results: report.results,
            },
        }
    }
}

/// Body of the country endpoint
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
    pub items: String,
    pub total_items: usize,
    pub country_results: Vec<CountryResult>,
}

impl CountryResponse {
    pub fn new(items: Option<String>, results: Option<Vec<CountryResult>>) -> Self {
        match (items, results) {
            (Some(items), Some(results)) => Self {
                error: String::new(),
                usage: None,
                items,
                total_items: results.len(),
                country_results: results,
            },
            _ => Self {
                error: NO_ITEMS_MESSAGE.to_string(),
                usage: Some(USAGE),
                items: String::new(),
                total_items: 0,
                country_results: Vec::new(),
            },
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
    pub uptime_seconds: i64,
    pub timestamp: String,
    pub bad_ipv4_count: usize,
    pub bad_ipv6_count: usize,
}

impl HealthStatus {
    pub fn healthy(service: &IpCheckService) -> Self {
        Self {
            status: "healthy",
            service: service.name().to_string(),
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: service.uptime_seconds(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            bad_ipv4_count: service.deny_list().ipv4_len(),
            bad_ipv6_count: service.deny_list().ipv6_len(),
        }
    }
}
