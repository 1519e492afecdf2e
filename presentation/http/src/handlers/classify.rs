//! Classification handler

use super::{items_param, QueryPairs};
use crate::{AppState, ClassifyResponse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use ipcheck_core::Batch;
use tracing::{debug, info};

/// Classify a comma-separated list of IP addresses.
///
/// Always answers 200: malformed entries are reported, and a missing
/// `items` parameter yields a usage message with empty results.
pub async fn classify_items(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Json<ClassifyResponse> {
    let items = items_param(query);
    debug!("Classifying items: {:?}", items);

    let batch = state.service.classify_items(items.as_deref());
    if let Batch::Processed(report) = &batch {
        info!(
            "Classified {} items ({} IPv4, {} IPv6, {} bad)",
            report.total_items(),
            report.counts.ipv4_count,
            report.counts.ipv6_count,
            report.counts.bad_ip_count
        );
    }

    Json(ClassifyResponse::from(batch))
}

#[cfg(test)]
mod tests {
    use crate::test_support::get_json;
    use crate::NO_ITEMS_MESSAGE;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_valid_ipv4_addresses() {
        let (status, body) = get_json("/?items=192.168.1.1,8.8.8.8").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ipv4_count"], 2);
        assert_eq!(body["ipv6_count"], 0);
        assert_eq!(body["error"], "");
        assert_eq!(body["items"], "192.168.1.1,8.8.8.8");
    }

    #[tokio::test]
    async fn test_valid_ipv6_addresses() {
        let (status, body) = get_json("/?items=2001:db8::1,fe80::1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ipv6_count"], 2);
    }

    #[tokio::test]
    async fn test_invalid_addresses_are_data() {
        let (status, body) = get_json("/?items=999.999.999.999,invalid").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["invalid_count"], 2);
        assert_eq!(body["malformed_count"], 2);
        assert_eq!(body["results"][0]["reason"], "invalid IP format");
    }

    #[tokio::test]
    async fn test_mixed_types_in_order() {
        let (_, body) = get_json("/?items=192.168.1.1,2001:db8::1,invalid").await;
        assert_eq!(body["total_items"], 3);
        assert_eq!(body["ipv4_count"], 1);
        assert_eq!(body["ipv6_count"], 1);
        assert_eq!(body["invalid_count"], 1);

        let types: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, vec!["IPv4", "IPv6", "invalid"]);
    }

    #[tokio::test]
    async fn test_empty_entries() {
        let (status, body) = get_json("/?items=192.168.1.1,,8.8.8.8").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_items"], 3);
        assert_eq!(body["empty_count"], 1);
        assert_eq!(body["results"][1]["ip"], "");
        assert_eq!(body["results"][1]["status"], "Bad IP");
        assert_eq!(body["results"][1]["reason"], "empty IP address");
    }

    #[tokio::test]
    async fn test_deny_listed_addresses() {
        let (_, body) = get_json("/?items=172.217.23.206,203.0.113.66,fe80::bad:cafe").await;
        assert_eq!(body["good_ip_count"], 1);
        assert_eq!(body["bad_ip_count"], 2);
        assert_eq!(body["results"][1]["kind"], "ipv4_bad");
        assert_eq!(body["results"][1]["reason"], "known malicious IPv4");
        assert_eq!(body["results"][2]["reason"], "known malicious IPv6");
        // deny-listed addresses are still valid addresses
        assert_eq!(body["valid_count"], 3);
    }

    #[tokio::test]
    async fn test_results_match_total() {
        let (_, body) =
            get_json("/?items=172.217.23.206,100.200.300.400,,2001:db8::1,invalid,2a00:1450:400e:811::200e").await;
        assert_eq!(body["total_items"], 6);
        assert_eq!(body["results"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_missing_items() {
        for uri in ["/", "/?items=", "/?other=1"] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["error"], NO_ITEMS_MESSAGE);
            assert!(body["usage"].is_string());
            assert_eq!(body["total_items"], 0);
            assert_eq!(body["results"], serde_json::json!([]));
        }
    }

    #[tokio::test]
    async fn test_percent_encoded_items() {
        let (_, body) = get_json("/v1/classify?items=%208.8.8.8%20%2C2001%3Adb8%3A%3A1").await;
        assert_eq!(body["total_items"], 2);
        assert_eq!(body["results"][0]["ip"], "8.8.8.8");
        assert_eq!(body["ipv6_count"], 1);
    }

    #[tokio::test]
    async fn test_repeated_items_parameter_uses_last_value() {
        let (status, body) = get_json("/?items=1.1.1.1&items=2.2.2.2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "");
        assert_eq!(body["items"], "2.2.2.2");
        assert_eq!(body["total_items"], 1);
        assert_eq!(body["results"][0]["ip"], "2.2.2.2");
    }
}
