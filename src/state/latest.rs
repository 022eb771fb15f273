//! Stale-response guard for the list views.
//!
//! Rapid page/filter changes can leave several loads in flight at once,
//! and nothing guarantees their responses arrive in order. Each list
//! view owns a [`Latest`]; a load takes a ticket before awaiting and
//! applies its response only if that ticket is still the newest. Stale
//! requests run to completion and are simply ignored.

#[cfg(test)]
#[path = "latest_test.rs"]
mod latest_test;

/// Monotonic ticket counter identifying the newest issued request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latest {
    current: u64,
}

impl Latest {
    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a response holding `ticket` is still the newest.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}
