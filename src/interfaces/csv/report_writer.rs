use crate::application::accrual::AccrualBreakdown;
use crate::domain::note::{DebtNote, Status};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the ledger report.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: u64,
    owner: &'a str,
    debtor: &'a str,
    status: &'a Status,
    original_amount: String,
    interest_amount: String,
    late_fee_amount: String,
    total_due: String,
    days_overdue: i64,
}

/// Writes per-note accrual breakdowns as CSV.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a new `ReportWriter` targeting any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Appends one report row for a note and its computed breakdown.
    pub fn write_row(&mut self, note: &DebtNote, breakdown: &AccrualBreakdown) -> Result<()> {
        self.writer.serialize(ReportRow {
            id: note.id.0,
            owner: &note.owner.0,
            debtor: &note.debtor_name,
            status: &note.status,
            original_amount: breakdown.original_amount.to_string(),
            interest_amount: breakdown.interest_amount.to_string(),
            late_fee_amount: breakdown.late_fee_amount.to_string(),
            total_due: breakdown.total_due.to_string(),
            days_overdue: breakdown.breakdown.days_overdue,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
