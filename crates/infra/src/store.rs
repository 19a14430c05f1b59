use std::collections::BTreeMap;

use fieldserve_booking::Booking;
use fieldserve_core::{BookingId, TechnicianId};
use fieldserve_technicians::Technician;

/// The shared mutable state: bookings and technicians plus the monotonic id
/// counters. Only ever touched under the [`Marketplace`](crate::Marketplace)
/// lock.
///
/// BTreeMaps keep listings in creation order (ids are monotonic) without an
/// extra sort.
#[derive(Debug, Default)]
pub struct MarketplaceState {
    bookings: BTreeMap<BookingId, Booking>,
    technicians: BTreeMap<TechnicianId, Technician>,
    next_booking_id: u64,
    next_technician_id: u64,
}

impl MarketplaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_booking_id(&mut self) -> BookingId {
        self.next_booking_id += 1;
        BookingId::new(self.next_booking_id)
    }

    pub fn allocate_technician_id(&mut self) -> TechnicianId {
        self.next_technician_id += 1;
        TechnicianId::new(self.next_technician_id)
    }

    pub fn insert_booking(&mut self, booking: Booking) {
        self.bookings.insert(booking.id(), booking);
    }

    pub fn insert_technician(&mut self, technician: Technician) {
        self.technicians.insert(technician.id(), technician);
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    pub fn booking_mut(&mut self, id: BookingId) -> Option<&mut Booking> {
        self.bookings.get_mut(&id)
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn technician(&self, id: TechnicianId) -> Option<&Technician> {
        self.technicians.get(&id)
    }

    pub fn technician_mut(&mut self, id: TechnicianId) -> Option<&mut Technician> {
        self.technicians.get_mut(&id)
    }

    pub fn technicians(&self) -> impl Iterator<Item = &Technician> {
        self.technicians.values()
    }
}
