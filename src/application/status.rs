use crate::domain::note::{DebtNote, Status};
use chrono::{DateTime, Utc};

/// Outcome of applying the overdue-derivation rule to a note.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Normalized {
    pub status: Status,
    pub changed: bool,
}

/// Derives the effective status of a note for the given day.
///
/// A `Pending` note whose due date (truncated to UTC midnight) is strictly
/// before today (truncated identically) becomes `Overdue`. A note due today
/// is not overdue. `Paid` and `Cancelled` are sticky; an already-`Overdue`
/// note is left alone.
///
/// Pure; persisting the transition is the caller's decision.
pub fn normalize_status(note: &DebtNote, today: DateTime<Utc>) -> Normalized {
    if note.status == Status::Pending && note.due_date.date_naive() < today.date_naive() {
        return Normalized {
            status: Status::Overdue,
            changed: true,
        };
    }
    Normalized {
        status: note.status,
        changed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::{Money, NoteId, OwnerId};
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn pending_note(due_date: DateTime<Utc>) -> DebtNote {
        DebtNote {
            id: NoteId(1),
            owner: OwnerId::from("user_1"),
            debtor_name: "Ada".to_owned(),
            debtor_email: None,
            debtor_phone: None,
            debtor_address: None,
            amount: Money::new(dec!(100)).unwrap(),
            created_at: due_date - Duration::days(30),
            due_date,
            status: Status::Pending,
            paid_at: None,
            archived_at: None,
            guarantor: None,
            contract: None,
        }
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let today = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        // Due at a different time of the same day; midnight truncation makes them equal.
        let note = pending_note(Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap());
        let result = normalize_status(&note, today);
        assert_eq!(result.status, Status::Pending);
        assert!(!result.changed);
    }

    #[test]
    fn test_due_yesterday_is_overdue() {
        let today = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 1).unwrap();
        let note = pending_note(Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 59).unwrap());
        let result = normalize_status(&note, today);
        assert_eq!(result.status, Status::Overdue);
        assert!(result.changed);
    }

    #[test]
    fn test_paid_past_due_stays_paid() {
        let today = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut note = pending_note(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        note.status = Status::Paid;
        note.paid_at = Some(today - Duration::days(10));
        let result = normalize_status(&note, today);
        assert_eq!(result.status, Status::Paid);
        assert!(!result.changed);
    }

    #[test]
    fn test_cancelled_past_due_stays_cancelled() {
        let today = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut note = pending_note(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        note.status = Status::Cancelled;
        let result = normalize_status(&note, today);
        assert_eq!(result.status, Status::Cancelled);
        assert!(!result.changed);
    }

    #[test]
    fn test_already_overdue_unchanged() {
        let today = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut note = pending_note(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        note.status = Status::Overdue;
        let result = normalize_status(&note, today);
        assert_eq!(result.status, Status::Overdue);
        assert!(!result.changed);
    }
}
