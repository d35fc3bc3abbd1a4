/// Tag attached to an in-flight request; a response is applied only while
/// its ticket is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out strictly increasing tickets.
#[derive(Debug, Default, Clone)]
pub struct Sequencer {
    last: u64,
}

impl Sequencer {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic() {
        let mut seq = Sequencer::default();
        let a = seq.issue();
        let b = seq.issue();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }
}
