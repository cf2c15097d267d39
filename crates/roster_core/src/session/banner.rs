//! Single-slot auto-dismissing error surface.
//!
//! # Responsibility
//! - Hold at most one user-facing error message at a time.
//! - Expire the message a fixed delay after it was shown.
//!
//! # Invariants
//! - A new message overwrites the slot and resets the deadline, so an
//!   earlier message's expiry can never hide a later one.

use std::time::{Duration, Instant};

/// How long a message stays visible after `show`.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Last-call-wins error display slot.
#[derive(Debug, Default)]
pub struct ErrorBanner {
    slot: Option<Slot>,
}

#[derive(Debug)]
struct Slot {
    message: String,
    deadline: Instant,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message, replacing any current one and resetting the
    /// dismiss deadline.
    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message, Instant::now());
    }

    /// `show` with an explicit clock, for deterministic expiry tests.
    pub fn show_at(&mut self, message: impl Into<String>, now: Instant) {
        self.slot = Some(Slot {
            message: message.into(),
            deadline: now + DISMISS_AFTER,
        });
    }

    /// Returns the visible message, if its deadline has not passed.
    pub fn message(&self) -> Option<&str> {
        self.message_at(Instant::now())
    }

    /// `message` with an explicit clock.
    pub fn message_at(&self, now: Instant) -> Option<&str> {
        self.slot
            .as_ref()
            .filter(|slot| now < slot.deadline)
            .map(|slot| slot.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorBanner, DISMISS_AFTER};
    use std::time::{Duration, Instant};

    #[test]
    fn message_is_visible_until_the_deadline() {
        let start = Instant::now();
        let mut banner = ErrorBanner::new();
        banner.show_at("boom", start);

        assert_eq!(banner.message_at(start), Some("boom"));
        assert_eq!(
            banner.message_at(start + DISMISS_AFTER - Duration::from_millis(1)),
            Some("boom")
        );
        assert_eq!(banner.message_at(start + DISMISS_AFTER), None);
    }

    #[test]
    fn a_newer_message_resets_the_deadline() {
        let start = Instant::now();
        let mut banner = ErrorBanner::new();
        banner.show_at("first", start);
        banner.show_at("second", start + Duration::from_secs(4));

        // Past the first message's deadline, the second is still visible.
        let after_first_deadline = start + DISMISS_AFTER + Duration::from_secs(1);
        assert_eq!(banner.message_at(after_first_deadline), Some("second"));
        assert_eq!(
            banner.message_at(start + Duration::from_secs(4) + DISMISS_AFTER),
            None
        );
    }

    #[test]
    fn empty_banner_shows_nothing() {
        let banner = ErrorBanner::new();
        assert_eq!(banner.message_at(Instant::now()), None);
    }
}
