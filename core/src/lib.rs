//! # IPChecker Core
//!
//! Classification rules, deny-lists and batch processing for the IPChecker
//! service. Presentation adapters depend on this crate; it has no I/O of its
//! own.

pub mod batch;
pub mod classifier;
pub mod country;
pub mod denylist;
pub mod errors;
pub mod service;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use batch::{process_items, Batch, BatchReport};
pub use classifier::{classify, is_valid_ipv4, is_valid_ipv6};
pub use denylist::DenyList;
pub use errors::{CoreError, DenyListError, PresentationError};
pub use service::IpCheckService;
pub use traits::PresentationAdapter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::classifier::*;
    pub use crate::country::*;
    pub use crate::denylist::*;
    pub use crate::errors::*;
    pub use crate::service::*;
    pub use crate::traits::*;
    pub use crate::types::*;
    pub use async_trait::async_trait;
}
