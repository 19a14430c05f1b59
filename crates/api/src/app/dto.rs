use serde::Deserialize;
use serde_json::json;

use fieldserve_booking::{Booking, BookingStatus, NewBooking};
use fieldserve_catalog::{Service, SubService};
use fieldserve_core::{CustomerId, SubServiceId};
use fieldserve_invoicing::Invoice;
use fieldserve_technicians::Technician;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: u64,
    pub sub_service_id: u64,
    pub property_type: String,
    pub quantity: i64,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub address: String,
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_new_booking(self) -> NewBooking {
        NewBooking {
            customer_id: CustomerId::new(self.customer_id),
            sub_service_id: SubServiceId::new(self.sub_service_id),
            property_type: self.property_type,
            quantity: self.quantity,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            address: self.address,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
pub struct MarkPaymentRequest {
    pub reference: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignTechnicianRequest {
    pub technician_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct RegisterTechnicianRequest {
    pub name: String,
    pub phone: String,
}

// -------------------------
// Response mapping
// -------------------------

pub fn booking_to_json(b: &Booking) -> serde_json::Value {
    json!({
        "id": b.id().as_u64(),
        "customer_id": b.customer_id().as_u64(),
        "sub_service_id": b.sub_service_id().as_u64(),
        "property_type": b.property_type(),
        "quantity": b.quantity(),
        "scheduled_date": b.scheduled_date(),
        "scheduled_time": b.scheduled_time(),
        "address": b.address(),
        "notes": b.notes(),
        "status": b.status().as_str(),
        "payment_status": b.payment_status().as_str(),
        "payment_reference": b.payment_reference(),
        "total_amount": b.total_amount(),
        "advance_amount": b.advance_amount(),
        "balance_amount": b.balance_amount(),
        "commission": b.commission(),
        "technician_id": b.technician_id().map(|t| t.as_u64()),
        "created_at": b.created_at().to_rfc3339(),
    })
}

pub fn technician_to_json(t: &Technician) -> serde_json::Value {
    json!({
        "id": t.id().as_u64(),
        "name": t.name(),
        "phone": t.phone(),
        "active": t.is_active(),
        "total_assigned": t.total_assigned(),
        "total_completed": t.total_completed(),
        "created_at": t.created_at().to_rfc3339(),
    })
}

pub fn invoice_to_json(inv: &Invoice) -> serde_json::Value {
    json!({
        "booking_id": inv.booking_id.as_u64(),
        "service_name": inv.service_name,
        "sub_service_name": inv.sub_service_name,
        "quantity": inv.quantity,
        "scheduled_date": inv.scheduled_date,
        "scheduled_time": inv.scheduled_time,
        "address": inv.address,
        "total_amount": inv.total_amount,
        "advance_amount": inv.advance_amount,
        "balance_amount": inv.balance_amount,
        "commission": inv.commission,
        "payment_status": inv.payment_status.as_str(),
    })
}

pub fn service_to_json(s: &Service) -> serde_json::Value {
    json!({
        "id": s.id.as_u64(),
        "name": s.name,
        "category": s.category,
        "base_price": s.base_price,
        "pricing_type": pricing_type_str(s.pricing_type),
    })
}

pub fn sub_service_to_json(s: &SubService) -> serde_json::Value {
    json!({
        "id": s.id.as_u64(),
        "service_id": s.service_id.as_u64(),
        "name": s.name,
        "base_price": s.base_price,
        "pricing_type": pricing_type_str(s.pricing_type),
    })
}

fn pricing_type_str(p: fieldserve_catalog::PricingType) -> &'static str {
    match p {
        fieldserve_catalog::PricingType::Fixed => "fixed",
        fieldserve_catalog::PricingType::PerSqft => "per_sqft",
        fieldserve_catalog::PricingType::PerAcre => "per_acre",
    }
}
