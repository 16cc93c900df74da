//! Timer-agnostic debouncing with distinct-until-changed semantics.
//!
//! Every input change calls [`Debouncer::touch`] and gets a [`Ticket`]. Whoever owns the timer
//! waits for [`Debouncer::window`] and then calls [`Debouncer::settle`] with that ticket and the
//! current value. Only the newest ticket settles, and only if the value differs from the last
//! settled one.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    latest: u64,
    last_settled: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            latest: 0,
            last_settled: None,
        }
    }

    /// Starts with `initial` as the last settled value, so settling back to it is suppressed.
    pub fn with_initial(window: Duration, initial: T) -> Self {
        Debouncer {
            window,
            latest: 0,
            last_settled: Some(initial),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Registers an input change, superseding every earlier ticket.
    pub fn touch(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Returns `value` if `ticket` is the newest one and `value` differs from the last settled
    /// value.
    pub fn settle(&mut self, ticket: Ticket, value: T) -> Option<T> {
        if ticket.0 != self.latest {
            tracing::trace!(ticket = ticket.0, latest = self.latest, "superseded ticket");
            return None;
        }
        if self.last_settled.as_ref() == Some(&value) {
            return None;
        }
        self.last_settled = Some(value.clone());
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn only_last_of_rapid_edits_settles() {
        let mut debouncer = Debouncer::new(WINDOW);

        let first = debouncer.touch();
        let second = debouncer.touch();
        let third = debouncer.touch();

        assert_eq!(debouncer.settle(first, "c".to_string()), None);
        assert_eq!(debouncer.settle(second, "cr".to_string()), None);
        assert_eq!(
            debouncer.settle(third, "cra".to_string()),
            Some("cra".to_string())
        );
    }

    #[test]
    fn unchanged_value_does_not_settle_twice() {
        let mut debouncer = Debouncer::new(WINDOW);

        let ticket = debouncer.touch();
        assert_eq!(debouncer.settle(ticket, 1), Some(1));

        // e.g. typing a character and deleting it again within the window
        let ticket = debouncer.touch();
        assert_eq!(debouncer.settle(ticket, 1), None);

        let ticket = debouncer.touch();
        assert_eq!(debouncer.settle(ticket, 2), Some(2));
    }

    #[test]
    fn initial_value_counts_as_settled() {
        let mut debouncer = Debouncer::with_initial(WINDOW, String::new());

        let ticket = debouncer.touch();

        assert_eq!(debouncer.settle(ticket, String::new()), None);
    }

    #[test]
    fn superseded_ticket_stays_dead_after_newer_settles() {
        let mut debouncer = Debouncer::new(WINDOW);

        let old = debouncer.touch();
        let new = debouncer.touch();
        assert_eq!(debouncer.settle(new, 5), Some(5));

        assert_eq!(debouncer.settle(old, 6), None);
        assert_eq!(debouncer.window(), WINDOW);
    }
}
