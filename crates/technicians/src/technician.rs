use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldserve_core::TechnicianId;

/// A technician who can be assigned to bookings.
///
/// `total_assigned` tracks current + historical load; reassignment of a
/// booking releases one unit back from the previous holder so a single
/// booking never counts twice. Deactivation is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    id: TechnicianId,
    name: String,
    phone: String,
    active: bool,
    total_assigned: u64,
    total_completed: u64,
    created_at: DateTime<Utc>,
}

impl Technician {
    pub fn new(
        id: TechnicianId,
        name: impl Into<String>,
        phone: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            active: true,
            total_assigned: 0,
            total_completed: 0,
            created_at,
        }
    }

    pub fn id(&self) -> TechnicianId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Whether new assignments may be given to this technician.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn total_assigned(&self) -> u64 {
        self.total_assigned
    }

    pub fn total_completed(&self) -> u64 {
        self.total_completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// One more booking assigned.
    pub fn record_assigned(&mut self) {
        self.total_assigned += 1;
    }

    /// A booking was reassigned away; give the load unit back. Saturating so
    /// a malformed snapshot can never panic the store.
    pub fn release_assignment(&mut self) {
        self.total_assigned = self.total_assigned.saturating_sub(1);
    }

    /// A booking this technician held reached `completed`.
    pub fn record_completed(&mut self) {
        self.total_completed += 1;
    }

    /// Terminal and irreversible. Existing assignments are left untouched;
    /// only new assignments are blocked.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech() -> Technician {
        Technician::new(TechnicianId::new(1), "Asha Verma", "+91-98-0000-0000", Utc::now())
    }

    #[test]
    fn new_technician_is_active_with_zero_counters() {
        let t = tech();
        assert!(t.is_active());
        assert_eq!(t.total_assigned(), 0);
        assert_eq!(t.total_completed(), 0);
    }

    #[test]
    fn assignment_counters_move_one_at_a_time() {
        let mut t = tech();
        t.record_assigned();
        t.record_assigned();
        assert_eq!(t.total_assigned(), 2);

        t.release_assignment();
        assert_eq!(t.total_assigned(), 1);

        t.record_completed();
        assert_eq!(t.total_completed(), 1);
        // Completion does not release load.
        assert_eq!(t.total_assigned(), 1);
    }

    #[test]
    fn release_saturates_at_zero() {
        let mut t = tech();
        t.release_assignment();
        assert_eq!(t.total_assigned(), 0);
    }

    #[test]
    fn deactivation_is_terminal_and_keeps_counters() {
        let mut t = tech();
        t.record_assigned();
        t.deactivate();
        assert!(!t.is_active());
        assert_eq!(t.total_assigned(), 1);

        // Second deactivation is a no-op, not an error path.
        t.deactivate();
        assert!(!t.is_active());
    }
}
