use crate::domain::note::Money;
use crate::error::{IouError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One periodic charge rule: `charge_amount` accrues once per full
/// `every_days`-day period elapsed from the schedule's origin point.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ChargeSchedule {
    pub enabled: bool,
    pub every_days: u32,
    pub charge_amount: Money,
}

impl ChargeSchedule {
    /// A disabled schedule; never accrues anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            every_days: 1,
            charge_amount: Money::ZERO,
        }
    }

    pub fn validate(&self, label: &str) -> Result<()> {
        if self.enabled && self.every_days == 0 {
            return Err(IouError::InvalidInput(format!(
                "{label} schedule is enabled but has a zero-day period"
            )));
        }
        if self.charge_amount.value() < Decimal::ZERO {
            return Err(IouError::InvalidInput(format!(
                "{label} charge amount must not be negative"
            )));
        }
        Ok(())
    }

    /// Total accrued over `elapsed_days` full days: one charge per complete
    /// period, partial periods accrue nothing.
    pub fn accrued(&self, elapsed_days: i64) -> Decimal {
        if !self.enabled || elapsed_days <= 0 {
            return Decimal::ZERO;
        }
        let periods = elapsed_days / i64::from(self.every_days);
        Decimal::from(periods) * self.charge_amount.value()
    }
}

/// Optional accrual schedule attached to a debt note.
///
/// Interest accrues from the note's creation date; late fees accrue only
/// past the due date. Absent terms mean the principal is the total due
/// forever, modulo status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    pub interest: ChargeSchedule,
    pub late_fee: ChargeSchedule,
    /// When the terms were attached. Informational; not used in accrual math.
    pub created_at: DateTime<Utc>,
}

impl ContractTerms {
    pub fn validate(&self) -> Result<()> {
        self.interest.validate("interest")?;
        self.late_fee.validate("late fee")?;
        Ok(())
    }
}
