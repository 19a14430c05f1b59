use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use fieldserve_booking::{Booking, BookingStatus, NewBooking};
use fieldserve_catalog::CatalogLookup;
use fieldserve_core::{BookingId, DomainError, DomainResult, TechnicianId};
use fieldserve_invoicing::Invoice;
use fieldserve_pricing::quote;
use fieldserve_technicians::Technician;

use crate::store::MarketplaceState;

/// The booking lifecycle manager and single write authority over the store.
///
/// Each public operation is one atomic read or write section on the whole
/// state: two concurrent `update_status` calls on the same booking serialize
/// so exactly one succeeds, and no reader can observe a booking pointing at a
/// technician whose counters were not yet updated.
#[derive(Debug)]
pub struct Marketplace<C> {
    catalog: C,
    state: RwLock<MarketplaceState>,
}

impl<C: CatalogLookup> Marketplace<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            state: RwLock::new(MarketplaceState::new()),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    // A poisoned lock only means a writer panicked mid-section; the guards
    // below never leave state partially applied, so recover the inner value.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, MarketplaceState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, MarketplaceState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a booking: resolve the sub-service, price it, store it as
    /// `pending`/`unpaid`.
    pub fn create_booking(&self, request: NewBooking) -> DomainResult<Booking> {
        let (service, sub) = self
            .catalog
            .resolve(request.sub_service_id)
            .ok_or(DomainError::SubServiceNotFound)?;
        let priced = quote(sub.base_price, sub.pricing_type, request.quantity)?;

        let mut state = self.write();
        let id = state.allocate_booking_id();
        let booking = Booking::new(id, request, priced, Utc::now());
        state.insert_booking(booking.clone());
        drop(state);

        tracing::info!(
            booking_id = %booking.id(),
            customer_id = %booking.customer_id(),
            sub_service_id = %booking.sub_service_id(),
            total_amount = booking.total_amount(),
            advance_amount = booking.advance_amount(),
            "booking created"
        );
        // Delivery is out of scope; the notification is a logged side effect.
        tracing::info!(
            target: "notify",
            booking_id = %booking.id(),
            customer_id = %booking.customer_id(),
            service = %service.name,
            scheduled_date = %booking.scheduled_date(),
            "booking confirmation notification queued"
        );

        Ok(booking)
    }

    /// Move a booking along the status table. On the transition to
    /// `completed`, credits the assigned technician's completion counter in
    /// the same write section (no-op if none assigned).
    pub fn update_status(&self, id: BookingId, next: BookingStatus) -> DomainResult<Booking> {
        let mut state = self.write();
        let booking = state.booking_mut(id).ok_or(DomainError::BookingNotFound)?;
        let previous = booking.status();
        booking.transition_to(next)?;
        let technician_id = booking.technician_id();
        let snapshot = booking.clone();

        if next == BookingStatus::Completed {
            if let Some(tech_id) = technician_id {
                if let Some(tech) = state.technician_mut(tech_id) {
                    tech.record_completed();
                }
            }
        }
        drop(state);

        tracing::info!(
            booking_id = %id,
            from = previous.as_str(),
            to = next.as_str(),
            "booking status updated"
        );
        Ok(snapshot)
    }

    /// Shorthand for `update_status(id, cancelled)`; valid from any
    /// non-terminal status.
    pub fn cancel_booking(&self, id: BookingId) -> DomainResult<Booking> {
        self.update_status(id, BookingStatus::Cancelled)
    }

    /// Record the advance payment (unpaid -> partial) with its reference.
    pub fn mark_payment(&self, id: BookingId, reference: &str) -> DomainResult<Booking> {
        let mut state = self.write();
        let booking = state.booking_mut(id).ok_or(DomainError::BookingNotFound)?;
        booking.record_advance_payment(reference)?;
        let snapshot = booking.clone();
        drop(state);

        tracing::info!(
            booking_id = %id,
            payment_reference = reference,
            "advance payment recorded"
        );
        Ok(snapshot)
    }

    /// Settle the booking in full. Idempotent once paid.
    pub fn mark_fully_paid(&self, id: BookingId) -> DomainResult<Booking> {
        let mut state = self.write();
        let booking = state.booking_mut(id).ok_or(DomainError::BookingNotFound)?;
        booking.mark_fully_paid();
        let snapshot = booking.clone();
        drop(state);

        tracing::info!(booking_id = %id, "booking marked fully paid");
        Ok(snapshot)
    }

    /// Derive the invoice projection. Pure read; safe to call repeatedly and
    /// concurrently.
    pub fn invoice(&self, id: BookingId) -> DomainResult<Invoice> {
        let state = self.read();
        let booking = state.booking(id).ok_or(DomainError::BookingNotFound)?;
        let (service, sub) = self
            .catalog
            .resolve(booking.sub_service_id())
            .ok_or(DomainError::SubServiceNotFound)?;
        Ok(Invoice::from_booking(booking, &service, &sub))
    }

    pub fn booking(&self, id: BookingId) -> DomainResult<Booking> {
        self.read()
            .booking(id)
            .cloned()
            .ok_or(DomainError::BookingNotFound)
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.read().bookings().cloned().collect()
    }

    pub fn technician(&self, id: TechnicianId) -> DomainResult<Technician> {
        self.read()
            .technician(id)
            .cloned()
            .ok_or(DomainError::TechnicianNotFound)
    }

    pub fn technicians(&self) -> Vec<Technician> {
        self.read().technicians().cloned().collect()
    }
}
