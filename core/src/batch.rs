//! Batch processing of comma-separated token lists

use crate::classifier::classify;
use crate::denylist::DenyList;
use crate::types::{CategoryCounts, ClassifiedItem};
use tracing::debug;

/// Outcome of processing one raw `items` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Batch {
    /// The parameter was absent or empty
    NoItems,
    /// At least one token was present (possibly an empty one)
    Processed(BatchReport),
}

/// Classified tokens in input order plus their aggregate counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub items: String,
    pub results: Vec<ClassifiedItem>,
    pub counts: CategoryCounts,
}

impl BatchReport {
    pub fn total_items(&self) -> usize {
        self.results.len()
    }
}

/// Split a raw `items` value on commas and trim each token.
///
/// Returns `None` when there is nothing to split.
pub fn split_items(raw: Option<&str>) -> Option<Vec<&str>> {
    match raw {
        None | Some("") => None,
        Some(raw) => Some(raw.split(',').map(str::trim).collect()),
    }
}

/// Classify every token of a raw `items` value, preserving order
pub fn process_items(raw: Option<&str>, deny_list: &DenyList) -> Batch {
    let Some(tokens) = split_items(raw) else {
        debug!("No items provided");
        return Batch::NoItems;
    };

    let results: Vec<ClassifiedItem> = tokens
        .into_iter()
        .map(|token| classify(token, deny_list))
        .collect();
    let counts: CategoryCounts = results.iter().collect();

    debug!(
        "Processed {} items: {} good, {} bad",
        results.len(),
        counts.good_ip_count,
        counts.bad_ip_count
    );

    Batch::Processed(BatchReport {
        items: raw.unwrap_or_default().to_string(),
        results,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IpKind, IpStatus};

    fn report(raw: &str) -> BatchReport {
        match process_items(Some(raw), &DenyList::builtin()) {
            Batch::Processed(report) => report,
            Batch::NoItems => panic!("expected items for {raw:?}"),
        }
    }

    #[test]
    fn test_absent_and_empty_input() {
        assert_eq!(process_items(None, &DenyList::builtin()), Batch::NoItems);
        assert_eq!(process_items(Some(""), &DenyList::builtin()), Batch::NoItems);
    }

    #[test]
    fn test_ipv4_counts() {
        let report = report("192.168.1.1,8.8.8.8");
        assert_eq!(report.total_items(), 2);
        assert_eq!(report.counts.ipv4_count, 2);
        assert_eq!(report.counts.ipv6_count, 0);
        assert_eq!(report.counts.valid_count, 2);
    }

    #[test]
    fn test_ipv6_counts() {
        let report = report("2001:db8::1,fe80::1");
        assert_eq!(report.counts.ipv6_count, 2);
        assert_eq!(report.counts.ipv4_count, 0);
    }

    #[test]
    fn test_order_and_trimming() {
        let report = report(" 8.8.8.8 ,invalid,  ,2001:db8::1");
        let ips: Vec<&str> = report.results.iter().map(|r| r.ip.as_str()).collect();
        assert_eq!(ips, vec!["8.8.8.8", "invalid", "", "2001:db8::1"]);

        let kinds: Vec<IpKind> = report.results.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![IpKind::Ipv4Good, IpKind::Malformed, IpKind::Empty, IpKind::Ipv6Good]
        );
        assert_eq!(report.items, " 8.8.8.8 ,invalid,  ,2001:db8::1");
    }

    #[test]
    fn test_empty_tokens_counted_separately() {
        let report = report("172.217.23.206,,2a00:1450:400e:811::200e");
        assert_eq!(report.total_items(), 3);
        assert_eq!(report.counts.empty_count, 1);
        assert_eq!(report.counts.malformed_count, 0);
        assert_eq!(report.counts.valid_count, 2);
        assert_eq!(report.results[1].status(), IpStatus::Bad);
    }

    #[test]
    fn test_only_commas() {
        let report = report(",,");
        assert_eq!(report.total_items(), 3);
        assert_eq!(report.counts.empty_count, 3);
        assert_eq!(report.counts.bad_ip_count, 3);
    }

    #[test]
    fn test_comprehensive_mix() {
        let report = report(
            "172.217.23.206,100.200.300.400,,2001:db8::1,invalid,2a00:1450:400e:811::200e,203.0.113.66",
        );
        assert_eq!(report.total_items(), 7);
        assert_eq!(report.results.len(), report.total_items());
        assert_eq!(report.counts.ipv4_count, 2);
        assert_eq!(report.counts.ipv6_count, 2);
        assert_eq!(report.counts.empty_count, 1);
        assert_eq!(report.counts.malformed_count, 2);
        assert_eq!(report.counts.invalid_count, 3);
        assert_eq!(report.counts.good_ip_count, 3);
        assert_eq!(report.counts.bad_ip_count, 4);
    }

    #[test]
    fn test_split_items() {
        assert_eq!(split_items(None), None);
        assert_eq!(split_items(Some("")), None);
        assert_eq!(split_items(Some(" ")), Some(vec![""]));
        assert_eq!(split_items(Some("a, b")), Some(vec!["a", "b"]));
    }
}
