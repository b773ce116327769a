use chrono::{DateTime, Duration, TimeZone, Utc};
use iou::domain::contract::{ChargeSchedule, ContractTerms};
use iou::domain::note::{DebtNote, Money, NoteId, OwnerId, Status};
use rust_decimal::Decimal;

/// Fixed "now" used across the integration scenarios.
pub fn reference_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
}

pub fn note(id: u64, owner: &str, amount: Decimal, due_date: DateTime<Utc>) -> DebtNote {
    DebtNote {
        id: NoteId(id),
        owner: OwnerId::from(owner),
        debtor_name: format!("debtor-{id}"),
        debtor_email: None,
        debtor_phone: None,
        debtor_address: None,
        amount: Money::new(amount).unwrap(),
        created_at: due_date - Duration::days(31),
        due_date,
        status: Status::Pending,
        paid_at: None,
        archived_at: None,
        guarantor: None,
        contract: None,
    }
}

pub fn contract(
    interest_days: u32,
    interest_amount: Decimal,
    late_fee_days: u32,
    late_fee_amount: Decimal,
) -> ContractTerms {
    ContractTerms {
        interest: ChargeSchedule {
            enabled: true,
            every_days: interest_days,
            charge_amount: Money::new(interest_amount).unwrap(),
        },
        late_fee: ChargeSchedule {
            enabled: true,
            every_days: late_fee_days,
            charge_amount: Money::new(late_fee_amount).unwrap(),
        },
        created_at: reference_day(),
    }
}
