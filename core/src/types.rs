//! Core data types for IPChecker

use serde::{Deserialize, Serialize, Serializer};

/// Reason attached to an empty token
pub const REASON_EMPTY: &str = "empty IP address";
/// Reason attached to a token that is neither IPv4 nor IPv6
pub const REASON_MALFORMED: &str = "invalid IP format";
/// Reason attached to a deny-listed IPv4 address
pub const REASON_DENIED_V4: &str = "known malicious IPv4";
/// Reason attached to a deny-listed IPv6 address
pub const REASON_DENIED_V6: &str = "known malicious IPv6";

/// Address family of a structurally valid token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpFamily {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl std::fmt::Display for IpFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "IPv4"),
            IpFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Classification of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpKind {
    Ipv4Good,
    Ipv4Bad,
    Ipv6Good,
    Ipv6Bad,
    Malformed,
    Empty,
}

impl IpKind {
    /// Address family, if the token parsed as an address at all
    pub fn family(&self) -> Option<IpFamily> {
        match self {
            IpKind::Ipv4Good | IpKind::Ipv4Bad => Some(IpFamily::V4),
            IpKind::Ipv6Good | IpKind::Ipv6Bad => Some(IpFamily::V6),
            IpKind::Malformed | IpKind::Empty => None,
        }
    }

    /// Whether the token is a structurally valid address
    pub fn is_valid(&self) -> bool {
        self.family().is_some()
    }

    /// Whether the token counts as a bad IP
    pub fn is_bad(&self) -> bool {
        !matches!(self, IpKind::Ipv4Good | IpKind::Ipv6Good)
    }

    pub fn status(&self) -> IpStatus {
        if self.is_bad() {
            IpStatus::Bad
        } else {
            IpStatus::Good
        }
    }
}

impl std::fmt::Display for IpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpKind::Ipv4Good => write!(f, "ipv4-good"),
            IpKind::Ipv4Bad => write!(f, "ipv4-bad"),
            IpKind::Ipv6Good => write!(f, "ipv6-good"),
            IpKind::Ipv6Bad => write!(f, "ipv6-bad"),
            IpKind::Malformed => write!(f, "malformed"),
            IpKind::Empty => write!(f, "empty"),
        }
    }
}

/// Good/bad verdict shown to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpStatus {
    #[serde(rename = "Good IP")]
    Good,
    #[serde(rename = "Bad IP")]
    Bad,
}

/// A classified token. Lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItem {
    /// Token as submitted, after trimming
    pub ip: String,
    pub kind: IpKind,
    pub reason: Option<&'static str>,
}

impl ClassifiedItem {
    pub fn new(ip: impl Into<String>, kind: IpKind) -> Self {
        Self {
            ip: ip.into(),
            kind,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: &'static str) -> Self {
        self.reason = Some(reason);
        self
    }

    pub fn family(&self) -> Option<IpFamily> {
        self.kind.family()
    }

    pub fn status(&self) -> IpStatus {
        self.kind.status()
    }
}

/// Wire form of a classified item
#[derive(Serialize)]
struct ClassifiedItemRepr<'a> {
    ip: &'a str,
    #[serde(rename = "type", serialize_with = "serialize_family")]
    family: Option<IpFamily>,
    kind: IpKind,
    valid: bool,
    status: IpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

fn serialize_family<S: Serializer>(family: &Option<IpFamily>, serializer: S) -> Result<S::Ok, S::Error> {
    match family {
        Some(family) => family.serialize(serializer),
        None => serializer.serialize_str("invalid"),
    }
}

impl Serialize for ClassifiedItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ClassifiedItemRepr {
            ip: &self.ip,
            family: self.family(),
            kind: self.kind,
            valid: self.kind.is_valid(),
            status: self.status(),
            reason: self.reason,
        }
        .serialize(serializer)
    }
}

/// Per-category counts for one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub ipv4_count: usize,
    pub ipv6_count: usize,
    pub empty_count: usize,
    pub malformed_count: usize,
    pub invalid_count: usize,
    pub valid_count: usize,
    pub good_ip_count: usize,
    pub bad_ip_count: usize,
}

impl CategoryCounts {
    /// Account for one classified token
    pub fn record(&mut self, kind: IpKind) {
        match kind.family() {
            Some(IpFamily::V4) => self.ipv4_count += 1,
            Some(IpFamily::V6) => self.ipv6_count += 1,
            None => self.invalid_count += 1,
        }
        match kind {
            IpKind::Empty => self.empty_count += 1,
            IpKind::Malformed => self.malformed_count += 1,
            _ => self.valid_count += 1,
        }
        if kind.is_bad() {
            self.bad_ip_count += 1;
        } else {
            self.good_ip_count += 1;
        }
    }
}

impl<'a> FromIterator<&'a ClassifiedItem> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = &'a ClassifiedItem>>(iter: I) -> Self {
        let mut counts = CategoryCounts::default();
        for item in iter {
            counts.record(item.kind);
        }
        counts
    }
}
