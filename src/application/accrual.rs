use crate::domain::note::{DebtNote, Status};
use crate::error::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Day counts reported alongside the monetary figures.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct DayCounts {
    /// Whole days between the note's creation and the accrual end-point.
    pub days_since_creation: i64,
    /// Whole days until the due date; negative once past due.
    pub days_until_due: i64,
    /// Whole days past the due date; zero when not past due.
    pub days_overdue: i64,
}

/// Itemized result of an accrual computation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccrualBreakdown {
    pub original_amount: Decimal,
    pub interest_amount: Decimal,
    pub late_fee_amount: Decimal,
    pub total_due: Decimal,
    pub breakdown: DayCounts,
}

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `start` to `end`: the real time delta, floor-divided by
/// 24 hours. A span of -1.5 days is -2 whole days, not -1.
///
/// All instants are UTC, so flooring the continuous delta and subtracting
/// calendar dates agree; there is no DST boundary to diverge on.
fn whole_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Computes the total amount owed on `note` as of the given instant.
///
/// Pure over its inputs: no I/O, no mutation of `note`. Once a note is paid,
/// accrual stops at `paid_at` and evaluating at any later instant yields the
/// same breakdown.
///
/// Interest accrues one charge per full `every_days`-day period elapsed since
/// creation; late fees accrue the same way but counted from the due date and
/// only once the end-point is strictly past it. An absent or disabled
/// contract is the normal case and yields a total equal to the principal.
pub fn compute_amount_due(note: &DebtNote, as_of: DateTime<Utc>) -> Result<AccrualBreakdown> {
    if let Some(contract) = &note.contract {
        contract.validate()?;
    }

    // Paid notes stop accruing at the payment moment, not at `as_of`.
    let end = match (note.status, note.paid_at) {
        (Status::Paid, Some(paid_at)) => paid_at,
        _ => as_of,
    };

    let days_since_creation = whole_days(note.created_at, end);
    let days_until_due = whole_days(end, note.due_date);
    let days_overdue = if end > note.due_date {
        whole_days(note.due_date, end)
    } else {
        0
    };

    let (interest_amount, late_fee_amount) = match &note.contract {
        Some(contract) => (
            contract.interest.accrued(days_since_creation),
            contract.late_fee.accrued(days_overdue),
        ),
        None => (Decimal::ZERO, Decimal::ZERO),
    };

    let original_amount = note.amount.value();
    Ok(AccrualBreakdown {
        original_amount,
        interest_amount,
        late_fee_amount,
        total_due: original_amount + interest_amount + late_fee_amount,
        breakdown: DayCounts {
            days_since_creation,
            days_until_due,
            days_overdue,
        },
    })
}
