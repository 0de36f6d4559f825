//! The closed set of hotel data suppliers.

use serde::{Deserialize, Serialize};

/// A known hotel data supplier. The set is fixed at compile time; there is
/// no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Supplier {
    Acme,
    Patagonia,
    Paperflies,
}

impl Supplier {
    /// Every supplier, in the order refresh cycles visit them.
    pub const ALL: [Supplier; 3] = [Supplier::Acme, Supplier::Patagonia, Supplier::Paperflies];

    /// Exact-match lookup by supplier name. Unknown names return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "acme" => Some(Supplier::Acme),
            "patagonia" => Some(Supplier::Patagonia),
            "paperflies" => Some(Supplier::Paperflies),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Supplier::Acme => "acme",
            Supplier::Patagonia => "patagonia",
            Supplier::Paperflies => "paperflies",
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint URL for each supplier, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierEndpoints {
    pub acme: String,
    pub patagonia: String,
    pub paperflies: String,
}

impl SupplierEndpoints {
    #[must_use]
    pub fn url(&self, supplier: Supplier) -> &str {
        match supplier {
            Supplier::Acme => &self.acme,
            Supplier::Patagonia => &self.patagonia,
            Supplier::Paperflies => &self.paperflies,
        }
    }
}
