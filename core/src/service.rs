//! The classification service shared by every presentation adapter

use crate::batch::{process_items, Batch};
use crate::country::{lookup_countries, CountryResult};
use crate::denylist::DenyList;
use chrono::{DateTime, Utc};

/// Immutable service state: the deny-list and process metadata.
#[derive(Debug, Clone)]
pub struct IpCheckService {
    name: String,
    deny_list: DenyList,
    started_at: DateTime<Utc>,
}

impl IpCheckService {
    pub fn new(name: impl Into<String>, deny_list: DenyList) -> Self {
        Self {
            name: name.into(),
            deny_list,
            started_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since the service was created
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }

    /// Classify a raw comma-separated `items` value
    pub fn classify_items(&self, raw: Option<&str>) -> Batch {
        process_items(raw, &self.deny_list)
    }

    /// Country hints for a raw comma-separated `items` value
    pub fn lookup_countries(&self, raw: Option<&str>) -> Option<Vec<CountryResult>> {
        lookup_countries(raw)
    }
}

impl Default for IpCheckService {
    fn default() -> Self {
        Self::new("ipchecker", DenyList::builtin())
    }
}
