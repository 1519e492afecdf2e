//! Core traits defining the adapter interfaces for IPChecker

use crate::errors::PresentationError;
use crate::service::IpCheckService;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for presentation layer adapters (HTTP and friends)
#[async_trait]
pub trait PresentationAdapter: Send + Sync {
    /// Start serving requests. Resolves once the adapter has stopped.
    async fn start(&self, service: Arc<IpCheckService>) -> Result<(), PresentationError>;

    /// Ask a running adapter to shut down gracefully
    async fn stop(&self) -> Result<(), PresentationError>;
}
