//! The raw-fetch seam between the refresh pipeline and the transport.

use async_trait::async_trait;
use hoteldm_core::Supplier;

use crate::client::SupplierClient;
use crate::error::SupplierError;

/// Something that can produce a supplier's raw payload as untyped JSON.
///
/// Retries and timeouts belong to implementations; callers treat any error
/// as final for the current cycle.
#[async_trait]
pub trait SupplierSource: Send + Sync {
    async fn fetch_raw(&self, supplier: Supplier) -> Result<serde_json::Value, SupplierError>;
}

#[async_trait]
impl SupplierSource for SupplierClient {
    async fn fetch_raw(&self, supplier: Supplier) -> Result<serde_json::Value, SupplierError> {
        self.fetch_supplier(supplier).await
    }
}
