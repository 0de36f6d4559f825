pub mod client;
pub mod error;
pub mod normalize;
mod retry;
pub mod source;
pub mod types;

pub use client::SupplierClient;
pub use error::SupplierError;
pub use normalize::normalize;
pub use source::SupplierSource;
