use std::net::SocketAddr;

use crate::suppliers::SupplierEndpoints;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Seconds between scheduled refresh cycles.
    pub refresh_interval_secs: u64,
    pub supplier_endpoints: SupplierEndpoints,
    pub supplier_request_timeout_secs: u64,
    pub supplier_user_agent: String,
    pub supplier_max_retries: u32,
    pub supplier_retry_backoff_base_secs: u64,
}
