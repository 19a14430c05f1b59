use std::sync::Arc;

use fieldserve_catalog::{InMemoryCatalog, PricingType};
use fieldserve_infra::Marketplace;

/// The marketplace core behind the HTTP surface. The catalog is built once
/// at startup and shared read-only.
pub type AppServices = Marketplace<Arc<InMemoryCatalog>>;

pub fn build_services() -> AppServices {
    Marketplace::new(Arc::new(default_catalog()))
}

/// Default catalog seed. The core treats the catalog as externally supplied
/// reference data; in-process seeding stands in for that supplier.
fn default_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();

    let lawn = catalog.add_service("Lawn Care", "outdoor", 1_500, PricingType::PerSqft);
    catalog.add_sub_service(lawn, "Mowing", 20, PricingType::PerSqft);
    catalog.add_sub_service(lawn, "Aeration", 3_500, PricingType::Fixed);

    let land = catalog.add_service("Land Maintenance", "estate", 40_000, PricingType::PerAcre);
    catalog.add_sub_service(land, "Brush Clearing", 45_000, PricingType::PerAcre);
    catalog.add_sub_service(land, "Fence Line Trimming", 12_000, PricingType::PerAcre);

    let pest = catalog.add_service("Pest Control", "indoor", 2_500, PricingType::Fixed);
    catalog.add_sub_service(pest, "General Spray", 2_500, PricingType::Fixed);
    catalog.add_sub_service(pest, "Termite Inspection", 499, PricingType::Fixed);

    catalog
}
