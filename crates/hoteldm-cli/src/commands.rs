//! Command handlers for the CLI.
//!
//! Both commands run a single refresh cycle against the configured supplier
//! endpoints. Nothing persists between invocations.

use std::sync::Arc;

use hoteldm_core::{AppConfig, Hotel, Supplier};
use hoteldm_pipeline::{HotelQuery, HotelStore, RefreshCoordinator, RefreshOutcome};
use hoteldm_suppliers::SupplierClient;

/// Maps `--supplier` names onto the known set, keeping the order given.
///
/// No names means every supplier. Unknown names are skipped with a warning;
/// duplicates are visited once.
pub(crate) fn resolve_suppliers(names: &[String]) -> Vec<Supplier> {
    if names.is_empty() {
        return Supplier::ALL.to_vec();
    }

    let mut suppliers = Vec::with_capacity(names.len());
    for name in names {
        match Supplier::from_name(name.trim()) {
            Some(supplier) if !suppliers.contains(&supplier) => suppliers.push(supplier),
            Some(_) => {}
            None => tracing::warn!(name = %name, "skipping unknown supplier"),
        }
    }
    suppliers
}

async fn refresh_once(
    config: &AppConfig,
    suppliers: Vec<Supplier>,
) -> anyhow::Result<Arc<HotelStore>> {
    let client = SupplierClient::from_app_config(config)?;
    let store = Arc::new(HotelStore::new());
    let coordinator = RefreshCoordinator::new(Arc::new(client), Arc::clone(&store), suppliers);

    match coordinator.run_cycle().await? {
        RefreshOutcome::Published {
            hotels,
            destinations,
        } => {
            tracing::info!(hotels, destinations, "refresh complete");
            Ok(store)
        }
        RefreshOutcome::Skipped => anyhow::bail!("refresh skipped: store is busy"),
    }
}

fn print_hotels(hotels: &[Hotel]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(hotels)?);
    Ok(())
}

/// Run one cycle against the selected suppliers and print every merged hotel.
pub(crate) async fn run_refresh(config: &AppConfig, names: &[String]) -> anyhow::Result<()> {
    let suppliers = resolve_suppliers(names);
    if suppliers.is_empty() {
        anyhow::bail!("no known suppliers selected; expected one of: acme, patagonia, paperflies");
    }

    let store = refresh_once(config, suppliers).await?;
    print_hotels(&store.all_hotels()?)
}

/// Run one cycle against every supplier, then answer a validated lookup.
pub(crate) async fn run_query(
    config: &AppConfig,
    hotel_ids: Vec<String>,
    destination_id: Option<u64>,
) -> anyhow::Result<()> {
    let query = HotelQuery::new(hotel_ids, destination_id);
    let store = refresh_once(config, Supplier::ALL.to_vec()).await?;
    let hotels = store.get_hotels(&query)?;
    if hotels.is_empty() {
        tracing::info!("no hotels matched");
    }
    print_hotels(&hotels)
}
