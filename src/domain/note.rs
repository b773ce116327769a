use crate::domain::contract::ContractTerms;
use crate::error::IouError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Unique identifier of a debt note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the account owner a note belongs to.
///
/// Every store read and write is scoped to an owner; a note is only visible
/// to the owner that recorded it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A non-negative monetary value.
///
/// Wrapper around `rust_decimal::Decimal` used for principals and periodic
/// charge amounts. Construction rejects negative values so accrual math never
/// has to re-check signs; deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, IouError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(IouError::InvalidInput(format!(
                "monetary amount must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = IouError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Lifecycle state of a debt note.
///
/// `Overdue` is derivable: it holds exactly when a `Pending` note's due date
/// has passed. `Paid` and `Cancelled` are terminal and never rewritten by
/// normalization.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Paid | Status::Cancelled)
    }
}

/// Optional guarantor attached to a debt note.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A record of money owed to the account owner by a named debtor.
///
/// The accrual engine treats this as read-only data; all mutation goes
/// through the service layer and the store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebtNote {
    pub id: NoteId,
    pub owner: OwnerId,
    pub debtor_name: String,
    #[serde(default)]
    pub debtor_email: Option<String>,
    #[serde(default)]
    pub debtor_phone: Option<String>,
    #[serde(default)]
    pub debtor_address: Option<String>,
    /// The principal: the original amount owed before any charges.
    pub amount: Money,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: Status,
    /// Present only while `status == Paid`.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub guarantor: Option<Guarantor>,
    #[serde(default)]
    pub contract: Option<ContractTerms>,
}
