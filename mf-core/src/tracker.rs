//! Single-flight bookkeeping for flux requests.
//!
//! Every submission takes a fresh `Ticket`. Only the response carrying the
//! latest ticket may update the result area; responses of superseded or
//! cancelled submissions are dropped.

/// Identifies one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestTracker {
    issued: u64,
    pending: Option<Ticket>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any pending one.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.pending == Some(ticket)
    }

    /// Claim the result slot for a finished request. Returns `false` when the
    /// ticket was superseded or cancelled, in which case the response must be
    /// discarded.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel the pending request, returning its ticket.
    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        assert_eq!(tracker.pending(), Some(ticket));
        assert!(tracker.accept(ticket));
        assert_eq!(tracker.pending(), None);
        assert!(!tracker.accept(ticket));
    }

    #[test]
    fn test_last_submission_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second > first);
        assert!(!tracker.accept(first));
        assert!(tracker.accept(second));
    }

    #[test]
    fn test_cancel() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        assert_eq!(tracker.cancel(), Some(ticket));
        assert_eq!(tracker.cancel(), None);
        assert!(!tracker.accept(ticket));
    }
}
