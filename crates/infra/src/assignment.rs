//! Technician assignment tracking.
//!
//! These operations are the sole writers of `total_assigned` /
//! `total_completed` (completion credit is applied by
//! [`Marketplace::update_status`] inside the same write section). Each runs
//! under the one store lock, so a booking and the two technician records it
//! touches always change together.

use chrono::Utc;

use fieldserve_booking::Booking;
use fieldserve_catalog::CatalogLookup;
use fieldserve_core::{BookingId, DomainError, DomainResult, TechnicianId};
use fieldserve_technicians::Technician;

use crate::marketplace::Marketplace;

impl<C: CatalogLookup> Marketplace<C> {
    /// Register a new technician: active, zero counters, store-assigned id.
    pub fn register_technician(&self, name: &str, phone: &str) -> Technician {
        let mut state = self.write();
        let id = state.allocate_technician_id();
        let technician = Technician::new(id, name, phone, Utc::now());
        state.insert_technician(technician.clone());
        drop(state);

        tracing::info!(technician_id = %id, name, "technician registered");
        technician
    }

    /// Assign (or reassign) a technician to a booking.
    ///
    /// Requires an active technician. Reassignment releases the previous
    /// holder's load unit before crediting the new one, so a single booking
    /// never counts twice. Assigning the current holder again is a no-op.
    /// Does not change the booking's status; callers typically follow with
    /// `update_status(assigned)`.
    pub fn assign_technician(
        &self,
        booking_id: BookingId,
        technician_id: TechnicianId,
    ) -> DomainResult<Booking> {
        let mut state = self.write();
        if state.booking(booking_id).is_none() {
            return Err(DomainError::BookingNotFound);
        }
        let technician = state
            .technician(technician_id)
            .ok_or(DomainError::TechnicianNotFound)?;
        if !technician.is_active() {
            return Err(DomainError::TechnicianInactive);
        }

        let booking = state
            .booking_mut(booking_id)
            .ok_or(DomainError::BookingNotFound)?;
        if booking.technician_id() == Some(technician_id) {
            return Ok(booking.clone());
        }

        let previous = booking.set_technician(technician_id);
        let snapshot = booking.clone();

        if let Some(prev_id) = previous {
            if let Some(prev) = state.technician_mut(prev_id) {
                prev.release_assignment();
            }
        }
        if let Some(tech) = state.technician_mut(technician_id) {
            tech.record_assigned();
        }
        drop(state);

        tracing::info!(
            booking_id = %booking_id,
            technician_id = %technician_id,
            reassigned_from = previous.map(|p| p.as_u64()),
            "technician assigned"
        );
        tracing::info!(
            target: "notify",
            booking_id = %booking_id,
            technician_id = %technician_id,
            scheduled_date = %snapshot.scheduled_date(),
            "assignment notification queued"
        );

        Ok(snapshot)
    }

    /// Deactivate a technician. Terminal; existing assignments stay valid,
    /// only new assignments are blocked. Idempotent on an already-inactive
    /// record.
    pub fn deactivate_technician(&self, technician_id: TechnicianId) -> DomainResult<Technician> {
        let mut state = self.write();
        let technician = state
            .technician_mut(technician_id)
            .ok_or(DomainError::TechnicianNotFound)?;
        technician.deactivate();
        let snapshot = technician.clone();
        drop(state);

        tracing::info!(technician_id = %technician_id, "technician deactivated");
        Ok(snapshot)
    }
}
