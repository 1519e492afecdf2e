//! Static deny-lists of "known malicious" addresses
//!
//! The built-in entries are illustrative only. Lists are assembled once at
//! startup and never mutated afterwards.

use crate::classifier::{is_valid_ipv4, is_valid_ipv6};
use crate::errors::DenyListError;
use crate::types::IpFamily;
use std::collections::HashSet;
use tracing::debug;

/// Built-in IPv4 entries (RFC 5737 documentation ranges)
pub const BUILTIN_BAD_IPV4: &[&str] = &[
    "192.0.2.13",
    "198.51.100.23",
    "203.0.113.66",
    "203.0.113.99",
];

/// Built-in IPv6 entries
pub const BUILTIN_BAD_IPV6: &[&str] = &[
    "2001:db8:bad1::1",
    "2001:db8:bad2::1",
    "fe80::bad:cafe",
    "2a00:bad:bad:bad::1",
];

/// Immutable pair of deny-lists, one per address family
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    ipv4: HashSet<String>,
    ipv6: HashSet<String>,
}

impl DenyList {
    /// Deny-list holding only the built-in entries
    pub fn builtin() -> Self {
        Self::builder().with_builtin().build_unchecked()
    }

    /// Deny-list that flags nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> DenyListBuilder {
        DenyListBuilder::default()
    }

    pub fn contains_ipv4(&self, ip: &str) -> bool {
        self.ipv4.contains(ip)
    }

    pub fn contains_ipv6(&self, ip: &str) -> bool {
        self.ipv6.contains(ip)
    }

    pub fn ipv4_len(&self) -> usize {
        self.ipv4.len()
    }

    pub fn ipv6_len(&self) -> usize {
        self.ipv6.len()
    }
}

/// Collects entries and validates them before producing a [`DenyList`]
#[derive(Debug, Default)]
pub struct DenyListBuilder {
    ipv4: Vec<String>,
    ipv6: Vec<String>,
}

impl DenyListBuilder {
    /// Include the built-in entries
    pub fn with_builtin(mut self) -> Self {
        self.ipv4.extend(BUILTIN_BAD_IPV4.iter().map(|ip| ip.to_string()));
        self.ipv6.extend(BUILTIN_BAD_IPV6.iter().map(|ip| ip.to_string()));
        self
    }

    pub fn with_ipv4<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ipv4.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn with_ipv6<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ipv6.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Build the deny-list, rejecting entries that are not valid addresses
    /// of the family they were listed under
    pub fn build(self) -> Result<DenyList, DenyListError> {
        if let Some(entry) = self.ipv4.iter().find(|ip| !is_valid_ipv4(ip)) {
            return Err(DenyListError::InvalidEntry {
                family: IpFamily::V4,
                entry: entry.clone(),
            });
        }
        if let Some(entry) = self.ipv6.iter().find(|ip| !is_valid_ipv6(ip)) {
            return Err(DenyListError::InvalidEntry {
                family: IpFamily::V6,
                entry: entry.clone(),
            });
        }
        Ok(self.build_unchecked())
    }

    fn build_unchecked(self) -> DenyList {
        let list = DenyList {
            ipv4: self.ipv4.into_iter().collect(),
            ipv6: self.ipv6.into_iter().collect(),
        };
        debug!(
            "Deny-list built with {} IPv4 and {} IPv6 entries",
            list.ipv4_len(),
            list.ipv6_len()
        );
        list
    }
}
