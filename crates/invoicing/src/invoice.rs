use serde::{Deserialize, Serialize};

use fieldserve_booking::{Booking, PaymentStatus};
use fieldserve_catalog::{Service, SubService};
use fieldserve_core::{Amount, BookingId};

/// Presentation/printing projection of a booking.
///
/// Amounts are copied verbatim from the booking; the stored figures are
/// authoritative and nothing here recomputes a split. An unpaid invoice is
/// still a valid invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub booking_id: BookingId,
    pub service_name: String,
    pub sub_service_name: String,
    pub quantity: i64,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub address: String,
    pub total_amount: Amount,
    pub advance_amount: Amount,
    pub balance_amount: Amount,
    pub commission: Amount,
    pub payment_status: PaymentStatus,
}

impl Invoice {
    pub fn from_booking(booking: &Booking, service: &Service, sub_service: &SubService) -> Self {
        Self {
            booking_id: booking.id(),
            service_name: service.name.clone(),
            sub_service_name: sub_service.name.clone(),
            quantity: booking.quantity(),
            scheduled_date: booking.scheduled_date().to_string(),
            scheduled_time: booking.scheduled_time().to_string(),
            address: booking.address().to_string(),
            total_amount: booking.total_amount(),
            advance_amount: booking.advance_amount(),
            balance_amount: booking.balance_amount(),
            commission: booking.commission(),
            payment_status: booking.payment_status(),
        }
    }
}
