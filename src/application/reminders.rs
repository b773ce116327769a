use crate::domain::note::NoteId;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// The kind of reminder e-mail a caller may send for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    Upcoming,
    Overdue,
    Final,
}

/// Tracks when each `(note, kind)` reminder was last sent and enforces a
/// per-kind cooldown window.
///
/// Owned by whatever service sends reminders; the cooldown check is a pure
/// function of the recorded map and the current time. This crate does not
/// send e-mail.
#[derive(Debug, Clone)]
pub struct ReminderLedger {
    sent: HashMap<(NoteId, ReminderKind), DateTime<Utc>>,
    cooldown: Duration,
}

impl Default for ReminderLedger {
    fn default() -> Self {
        Self::new(Duration::minutes(5))
    }
}

impl ReminderLedger {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            sent: HashMap::new(),
            cooldown,
        }
    }

    pub fn is_on_cooldown(&self, id: NoteId, kind: ReminderKind, now: DateTime<Utc>) -> bool {
        match self.sent.get(&(id, kind)) {
            Some(last) => now - *last < self.cooldown,
            None => false,
        }
    }

    /// Time left before another reminder of this kind may be sent; `None`
    /// when the cooldown has elapsed or no reminder was ever sent.
    pub fn remaining(&self, id: NoteId, kind: ReminderKind, now: DateTime<Utc>) -> Option<Duration> {
        let last = self.sent.get(&(id, kind))?;
        let remaining = self.cooldown - (now - *last);
        (remaining > Duration::zero()).then_some(remaining)
    }

    pub fn record_sent(&mut self, id: NoteId, kind: ReminderKind, now: DateTime<Utc>) {
        self.sent.insert((id, kind), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unsent_reminder_is_not_on_cooldown() {
        let ledger = ReminderLedger::default();
        assert!(!ledger.is_on_cooldown(NoteId(1), ReminderKind::Upcoming, Utc::now()));
        assert!(ledger.remaining(NoteId(1), ReminderKind::Upcoming, Utc::now()).is_none());
    }

    #[test]
    fn test_cooldown_applies_then_expires() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let mut ledger = ReminderLedger::default();
        ledger.record_sent(NoteId(1), ReminderKind::Overdue, t0);

        assert!(ledger.is_on_cooldown(NoteId(1), ReminderKind::Overdue, t0 + Duration::minutes(4)));
        assert_eq!(
            ledger.remaining(NoteId(1), ReminderKind::Overdue, t0 + Duration::minutes(4)),
            Some(Duration::minutes(1))
        );
        assert!(!ledger.is_on_cooldown(NoteId(1), ReminderKind::Overdue, t0 + Duration::minutes(5)));
    }

    #[test]
    fn test_cooldowns_are_independent_per_kind_and_note() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let mut ledger = ReminderLedger::default();
        ledger.record_sent(NoteId(1), ReminderKind::Final, t0);

        assert!(!ledger.is_on_cooldown(NoteId(1), ReminderKind::Upcoming, t0));
        assert!(!ledger.is_on_cooldown(NoteId(2), ReminderKind::Final, t0));
    }
}
