//! Token classification rules
//!
//! A token is IPv4 when it has exactly four dot-separated decimal groups in
//! `0..=255`, and IPv6 when it is a full eight-group address or uses exactly
//! one `::` compression run. Everything else is malformed.

use crate::denylist::DenyList;
use crate::types::*;
use once_cell::sync::Lazy;
use regex::RegexSet;
use tracing::trace;

static IPV6_FORMS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        // full address
        r"(?i)^([0-9a-f]{1,4}:){7}[0-9a-f]{1,4}$",
        // :: at the end
        r"(?i)^([0-9a-f]{1,4}:){1,7}:$",
        // :: in the middle
        r"(?i)^([0-9a-f]{1,4}:){1,6}:[0-9a-f]{1,4}$",
        r"(?i)^([0-9a-f]{1,4}:){1,5}(:[0-9a-f]{1,4}){1,2}$",
        r"(?i)^([0-9a-f]{1,4}:){1,4}(:[0-9a-f]{1,4}){1,3}$",
        r"(?i)^([0-9a-f]{1,4}:){1,3}(:[0-9a-f]{1,4}){1,4}$",
        r"(?i)^([0-9a-f]{1,4}:){1,2}(:[0-9a-f]{1,4}){1,5}$",
        r"(?i)^[0-9a-f]{1,4}:(:[0-9a-f]{1,4}){1,6}$",
        // :: at the start
        r"(?i)^:(:[0-9a-f]{1,4}){1,7}$",
        // unspecified address
        r"^::$",
    ])
    .expect("IPv6 patterns are valid")
});

/// Check for a dotted quad with every octet in `0..=255`
pub fn is_valid_ipv4(ip: &str) -> bool {
    let mut groups = 0;
    for octet in ip.split('.') {
        groups += 1;
        if groups > 4 || octet.is_empty() || octet.len() > 3 {
            return false;
        }
        if !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match octet.parse::<u16>() {
            Ok(value) if value <= 255 => {}
            _ => return false,
        }
    }
    groups == 4
}

/// Check for one of the standard IPv6 textual forms
pub fn is_valid_ipv6(ip: &str) -> bool {
    ip.contains(':') && IPV6_FORMS.is_match(ip)
}

/// Classify a single, already trimmed token
pub fn classify(token: &str, deny_list: &DenyList) -> ClassifiedItem {
    let item = if token.is_empty() {
        ClassifiedItem::new(token, IpKind::Empty).with_reason(REASON_EMPTY)
    } else if is_valid_ipv4(token) {
        if deny_list.contains_ipv4(token) {
            ClassifiedItem::new(token, IpKind::Ipv4Bad).with_reason(REASON_DENIED_V4)
        } else {
            ClassifiedItem::new(token, IpKind::Ipv4Good)
        }
    } else if is_valid_ipv6(token) {
        if deny_list.contains_ipv6(token) {
            ClassifiedItem::new(token, IpKind::Ipv6Bad).with_reason(REASON_DENIED_V6)
        } else {
            ClassifiedItem::new(token, IpKind::Ipv6Good)
        }
    } else {
        ClassifiedItem::new(token, IpKind::Malformed).with_reason(REASON_MALFORMED)
    };

    trace!("Classified {:?} as {}", token, item.kind);
    item
}
