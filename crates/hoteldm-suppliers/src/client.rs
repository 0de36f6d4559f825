use std::time::Duration;

use hoteldm_core::{Supplier, SupplierEndpoints};
use reqwest::Client;

use crate::error::SupplierError;
use crate::retry::retry_with_backoff;

/// HTTP client for the supplier endpoints.
///
/// Non-2xx responses surface as typed errors. Transient failures (429,
/// network errors) are retried with exponential backoff up to `max_retries`
/// additional attempts; the refresh pipeline itself never retries.
pub struct SupplierClient {
    client: Client,
    endpoints: SupplierEndpoints,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl SupplierClient {
    /// Creates a `SupplierClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoints: SupplierEndpoints,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SupplierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoints,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_app_config(config: &hoteldm_core::AppConfig) -> Result<Self, SupplierError> {
        Self::new(
            config.supplier_endpoints.clone(),
            config.supplier_request_timeout_secs,
            &config.supplier_user_agent,
            config.supplier_max_retries,
            config.supplier_retry_backoff_base_secs,
        )
    }

    /// Fetches one supplier's payload and parses it as untyped JSON.
    ///
    /// The payload is not decoded into supplier records here; the normalizer
    /// does that.
    ///
    /// # Errors
    ///
    /// - [`SupplierError::RateLimited`]: HTTP 429 after all retries.
    /// - [`SupplierError::NotFound`]: HTTP 404 (not retried).
    /// - [`SupplierError::UnexpectedStatus`]: any other non-2xx status (not retried).
    /// - [`SupplierError::Http`]: network or TLS failure after all retries.
    /// - [`SupplierError::InvalidBody`]: the body is not JSON (not retried).
    pub async fn fetch_supplier(
        &self,
        supplier: Supplier,
    ) -> Result<serde_json::Value, SupplierError> {
        let url = self.endpoints.url(supplier).to_owned();

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(SupplierError::RateLimited {
                        supplier,
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(SupplierError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(SupplierError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                parse_body(supplier, &body)
            }
        })
        .await
    }
}

/// Parses a raw response body into untyped JSON.
pub(crate) fn parse_body(
    supplier: Supplier,
    body: &str,
) -> Result<serde_json::Value, SupplierError> {
    serde_json::from_str(body).map_err(|source| SupplierError::InvalidBody { supplier, source })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
