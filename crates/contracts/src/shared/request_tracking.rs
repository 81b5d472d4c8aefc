//! Bookkeeping for in-flight requests.
//!
//! `LoadingCounter` drives the page-level spinner: it stays busy while any
//! request is pending, however the requests overlap. `GenerationGate` lets a
//! component ignore responses that arrive after a newer request was issued.

/// Number of requests currently in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingCounter {
    in_flight: usize,
}

impl LoadingCounter {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub fn end(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// Ticket handed out for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Hands out increasing tickets; only the newest one is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationGate {
    latest: u64,
}

impl GenerationGate {
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_requests_keep_spinner() {
        let mut counter = LoadingCounter::default();
        counter.begin();
        counter.begin();
        counter.end();
        assert!(counter.is_loading());
        counter.end();
        assert!(!counter.is_loading());
    }

    #[test]
    fn test_unbalanced_end_does_not_underflow() {
        let mut counter = LoadingCounter::default();
        counter.end();
        assert_eq!(counter.in_flight(), 0);
        counter.begin();
        assert_eq!(counter.in_flight(), 1);
    }

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut gate = GenerationGate::default();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }
}
