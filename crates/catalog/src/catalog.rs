use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use fieldserve_core::{Amount, ServiceId, SubServiceId};

/// Billing mode for a sub-service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    /// Flat price regardless of quantity.
    Fixed,
    /// Price multiplied by the booked square footage.
    PerSqft,
    /// Price multiplied by the booked acreage.
    PerAcre,
}

impl PricingType {
    /// Whether the quoted total scales with the requested quantity.
    pub fn scales_with_quantity(self) -> bool {
        !matches!(self, PricingType::Fixed)
    }
}

/// Top-level service category. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub base_price: Amount,
    pub pricing_type: PricingType,
}

/// Bookable leaf entry. Belongs to exactly one `Service` by id; the relation
/// is a lookup only, never an ownership edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubService {
    pub id: SubServiceId,
    pub service_id: ServiceId,
    pub name: String,
    pub base_price: Amount,
    pub pricing_type: PricingType,
}

/// Read access to the externally-supplied catalog.
pub trait CatalogLookup {
    fn service(&self, id: ServiceId) -> Option<Service>;

    fn sub_service(&self, id: SubServiceId) -> Option<SubService>;

    fn services(&self) -> Vec<Service>;

    fn sub_services_of(&self, service_id: ServiceId) -> Vec<SubService>;

    /// Resolve a sub-service together with its parent service.
    fn resolve(&self, id: SubServiceId) -> Option<(Service, SubService)> {
        let sub = self.sub_service(id)?;
        let service = self.service(sub.service_id)?;
        Some((service, sub))
    }
}

impl<T: CatalogLookup> CatalogLookup for Arc<T> {
    fn service(&self, id: ServiceId) -> Option<Service> {
        (**self).service(id)
    }

    fn sub_service(&self, id: SubServiceId) -> Option<SubService> {
        (**self).sub_service(id)
    }

    fn services(&self) -> Vec<Service> {
        (**self).services()
    }

    fn sub_services_of(&self, service_id: ServiceId) -> Vec<SubService> {
        (**self).sub_services_of(service_id)
    }
}

/// In-process catalog, built once at startup and shared read-only.
///
/// BTreeMaps keep listings in id order without an extra sort.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    services: BTreeMap<ServiceId, Service>,
    sub_services: BTreeMap<SubServiceId, SubService>,
    next_service_id: u64,
    next_sub_service_id: u64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_service(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: Amount,
        pricing_type: PricingType,
    ) -> ServiceId {
        self.next_service_id += 1;
        let id = ServiceId::new(self.next_service_id);
        self.services.insert(
            id,
            Service {
                id,
                name: name.into(),
                category: category.into(),
                base_price,
                pricing_type,
            },
        );
        id
    }

    pub fn add_sub_service(
        &mut self,
        service_id: ServiceId,
        name: impl Into<String>,
        base_price: Amount,
        pricing_type: PricingType,
    ) -> SubServiceId {
        self.next_sub_service_id += 1;
        let id = SubServiceId::new(self.next_sub_service_id);
        self.sub_services.insert(
            id,
            SubService {
                id,
                service_id,
                name: name.into(),
                base_price,
                pricing_type,
            },
        );
        id
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn service(&self, id: ServiceId) -> Option<Service> {
        self.services.get(&id).cloned()
    }

    fn sub_service(&self, id: SubServiceId) -> Option<SubService> {
        self.sub_services.get(&id).cloned()
    }

    fn services(&self) -> Vec<Service> {
        self.services.values().cloned().collect()
    }

    fn sub_services_of(&self, service_id: ServiceId) -> Vec<SubService> {
        self.sub_services
            .values()
            .filter(|s| s.service_id == service_id)
            .cloned()
            .collect()
    }
}
