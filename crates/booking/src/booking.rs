use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldserve_core::{
    Amount, BookingId, CustomerId, DomainError, DomainResult, SubServiceId, TechnicianId,
};
use fieldserve_pricing::Quote;

/// Fulfilment status lifecycle.
///
/// Intentionally a one-way funnel: a fulfilled or aborted booking cannot be
/// revived. Cancelling again, if ever needed, means creating a new booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 6] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Assigned,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// The transition table. Anything not listed here is rejected.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Assigned)
                | (Pending, Cancelled)
                | (Confirmed, Assigned)
                | (Confirmed, Cancelled)
                | (Assigned, InProgress)
                | (Assigned, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Assigned => "assigned",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Payment status lifecycle. Advanced independently of fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
}

impl PaymentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
        }
    }
}

/// Caller-supplied fields for a new booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub customer_id: CustomerId,
    pub sub_service_id: SubServiceId,
    pub property_type: String,
    pub quantity: i64,
    /// Stored and returned verbatim; the core does not parse calendars.
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub address: String,
    pub notes: Option<String>,
}

/// The central entity. Created once, mutated in place by the store layer,
/// never deleted (cancellation is a terminal status, not removal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    customer_id: CustomerId,
    sub_service_id: SubServiceId,
    property_type: String,
    quantity: i64,
    scheduled_date: String,
    scheduled_time: String,
    address: String,
    notes: Option<String>,
    status: BookingStatus,
    payment_status: PaymentStatus,
    payment_reference: Option<String>,
    total_amount: Amount,
    advance_amount: Amount,
    balance_amount: Amount,
    /// Technician share, fixed at creation from the quote. Never recomputed
    /// or edited independently; the company share is the complement.
    commission: Amount,
    technician_id: Option<TechnicianId>,
    created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, request: NewBooking, quote: Quote, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id: request.customer_id,
            sub_service_id: request.sub_service_id,
            property_type: request.property_type,
            quantity: request.quantity,
            scheduled_date: request.scheduled_date,
            scheduled_time: request.scheduled_time,
            address: request.address,
            notes: request.notes,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            payment_reference: None,
            total_amount: quote.total_amount,
            advance_amount: quote.advance_amount,
            balance_amount: quote.balance_amount,
            commission: quote.commission,
            technician_id: None,
            created_at,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn sub_service_id(&self) -> SubServiceId {
        self.sub_service_id
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn scheduled_date(&self) -> &str {
        &self.scheduled_date
    }

    pub fn scheduled_time(&self) -> &str {
        &self.scheduled_time
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn payment_reference(&self) -> Option<&str> {
        self.payment_reference.as_deref()
    }

    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    pub fn advance_amount(&self) -> Amount {
        self.advance_amount
    }

    pub fn balance_amount(&self) -> Amount {
        self.balance_amount
    }

    pub fn commission(&self) -> Amount {
        self.commission
    }

    pub fn technician_id(&self) -> Option<TechnicianId> {
        self.technician_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Move fulfilment status along the transition table.
    pub fn transition_to(&mut self, next: BookingStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_transition(format!(
                "{} -> {}",
                self.status.as_str(),
                next.as_str()
            )));
        }
        self.status = next;
        Ok(())
    }

    /// Record the advance payment: unpaid -> partial, keeping the reference.
    pub fn record_advance_payment(&mut self, reference: impl Into<String>) -> DomainResult<()> {
        match self.payment_status {
            PaymentStatus::Unpaid => {
                self.payment_status = PaymentStatus::Partial;
                self.payment_reference = Some(reference.into());
                Ok(())
            }
            PaymentStatus::Partial => Err(DomainError::invalid_payment_transition(
                "advance already recorded (partial)",
            )),
            PaymentStatus::Paid => Err(DomainError::invalid_payment_transition(
                "booking is already fully paid",
            )),
        }
    }

    /// Settle the booking in full. Idempotent once paid.
    pub fn mark_fully_paid(&mut self) {
        self.payment_status = PaymentStatus::Paid;
    }

    /// Point the booking at a technician, returning whoever held the
    /// assignment before. Counter bookkeeping and the active-status check
    /// belong to the assignment tracker, not here.
    pub fn set_technician(&mut self, technician_id: TechnicianId) -> Option<TechnicianId> {
        self.technician_id.replace(technician_id)
    }
}
