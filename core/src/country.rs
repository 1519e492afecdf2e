//! Illustrative country hints derived from address prefixes

use crate::batch::split_items;
use crate::classifier::classify;
use crate::denylist::DenyList;
use crate::types::{ClassifiedItem, IpFamily, IpKind, REASON_EMPTY, REASON_MALFORMED};
use serde::Serialize;

const PRIVATE_RANGE: &str = "RFC1918 private range";
const LOOPBACK: &str = "loopback address";

/// Region label plus an optional explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryHint {
    pub country: &'static str,
    pub reason: Option<&'static str>,
}

impl CountryHint {
    const fn of(country: &'static str) -> Self {
        Self { country, reason: None }
    }

    const fn because(country: &'static str, reason: &'static str) -> Self {
        Self {
            country,
            reason: Some(reason),
        }
    }
}

/// Per-token country lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryResult {
    pub ip: String,
    pub country: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

fn ipv4_country(ip: &str) -> CountryHint {
    let first_octet = ip.split('.').next().and_then(|o| o.parse::<u8>().ok());
    match first_octet {
        Some(100) => CountryHint::of("US"),
        Some(101) => CountryHint::of("UK"),
        Some(102) => CountryHint::of("China"),
        Some(103) => CountryHint::of("Germany"),
        Some(104) => CountryHint::of("France"),
        Some(105) => CountryHint::of("Japan"),
        Some(106) => CountryHint::of("Canada"),
        Some(107) => CountryHint::of("Australia"),
        Some(108) => CountryHint::of("Brazil"),
        Some(109) => CountryHint::of("India"),
        Some(110) => CountryHint::of("Russia"),
        Some(111) => CountryHint::of("South Korea"),
        Some(112) => CountryHint::of("Italy"),
        Some(113) => CountryHint::of("Spain"),
        Some(114) => CountryHint::of("Netherlands"),
        Some(115) => CountryHint::of("Sweden"),
        Some(1..=9) => CountryHint::of("US"),
        Some(10 | 172 | 192) => CountryHint::because("Private Network", PRIVATE_RANGE),
        Some(127) => CountryHint::because("Localhost", LOOPBACK),
        _ => CountryHint::because("Unknown", "no country mapping"),
    }
}

fn ipv6_country(ip: &str) -> CountryHint {
    let first_group = ip.split(':').next().unwrap_or_default().to_ascii_lowercase();
    match first_group.as_str() {
        "" => CountryHint::because("Localhost", LOOPBACK),
        "2001" => CountryHint::because("Global Unicast", "production IPv6"),
        "2a00" => CountryHint::because("Europe", "European IPv6 range"),
        "2a01" => CountryHint::because("UK", "UK IPv6 range"),
        "2a02" => CountryHint::because("Germany", "German IPv6 range"),
        "2a03" => CountryHint::because("France", "French IPv6 range"),
        "2400" => CountryHint::because("Asia Pacific", "APNIC IPv6 range"),
        "2600" => CountryHint::because("US", "North American IPv6 range"),
        "2800" => CountryHint::because("Latin America", "LACNIC IPv6 range"),
        "fe80" => CountryHint::because("Link Local", "link-local address"),
        "fc00" | "fd00" => CountryHint::because("Private Network", "unique local address"),
        _ => CountryHint::because("Country Unavailable", "IPv6 prefix not mapped"),
    }
}

/// Country hint for an already classified token
pub fn country_for(item: &ClassifiedItem) -> CountryHint {
    match (item.kind, item.family()) {
        (IpKind::Empty, _) => CountryHint::because("Unknown", REASON_EMPTY),
        (_, Some(IpFamily::V4)) => ipv4_country(&item.ip),
        (_, Some(IpFamily::V6)) => ipv6_country(&item.ip),
        (_, None) => CountryHint::because("Unknown", REASON_MALFORMED),
    }
}

/// Look up country hints for every token of a raw `items` value.
///
/// Returns `None` when no items were provided.
pub fn lookup_countries(raw: Option<&str>) -> Option<Vec<CountryResult>> {
    // deny-list status has no bearing on the hint
    let deny_list = DenyList::empty();
    let tokens = split_items(raw)?;

    Some(
        tokens
            .into_iter()
            .map(|token| {
                let item = classify(token, &deny_list);
                let hint = country_for(&item);
                CountryResult {
                    ip: item.ip,
                    country: hint.country,
                    reason: hint.reason,
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(ip: &str) -> CountryHint {
        country_for(&classify(ip, &DenyList::empty()))
    }

    #[test]
    fn test_ipv4_first_octet_mapping() {
        assert_eq!(hint("100.217.23.206").country, "US");
        assert_eq!(hint("101.217.23.206").country, "UK");
        assert_eq!(hint("102.217.23.206").country, "China");
        assert_eq!(hint("115.1.1.1").country, "Sweden");
        assert_eq!(hint("8.8.8.8"), CountryHint::of("US"));
        assert_eq!(hint("10.0.0.1"), CountryHint::because("Private Network", PRIVATE_RANGE));
        assert_eq!(hint("127.0.0.1"), CountryHint::because("Localhost", LOOPBACK));
        assert_eq!(hint("172.217.23.206").country, "Private Network");
        assert_eq!(hint("200.1.1.1").country, "Unknown");
    }

    #[test]
    fn test_ipv6_prefix_mapping() {
        assert_eq!(hint("2001:db8::1").country, "Global Unicast");
        assert_eq!(hint("2A00:1450:400e:811::200e").country, "Europe");
        assert_eq!(hint("fe80::1").country, "Link Local");
        assert_eq!(hint("fd00::1").country, "Private Network");
        assert_eq!(hint("::1").country, "Localhost");
        assert_eq!(hint("3000::1").country, "Country Unavailable");
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(hint(""), CountryHint::because("Unknown", REASON_EMPTY));
        assert_eq!(hint("100.200.300.400"), CountryHint::because("Unknown", REASON_MALFORMED));
        assert_eq!(hint("not-an-ip").country, "Unknown");
    }

    #[test]
    fn test_lookup_countries() {
        assert_eq!(lookup_countries(None), None);
        assert_eq!(lookup_countries(Some("")), None);

        let results = lookup_countries(Some("100.217.23.206,,102.217.23.206")).unwrap();
        let countries: Vec<&str> = results.iter().map(|r| r.country).collect();
        assert_eq!(countries, vec!["US", "Unknown", "China"]);
        assert_eq!(results[1].ip, "");
        assert_eq!(results[1].reason, Some(REASON_EMPTY));
    }

    #[test]
    fn test_deny_listed_addresses_still_mapped() {
        let list = DenyList::builtin();
        let item = classify("2a00:bad:bad:bad::1", &list);
        assert_eq!(item.kind, IpKind::Ipv6Bad);
        assert_eq!(country_for(&item).country, "Europe");
    }
}
