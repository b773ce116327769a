pub mod accrual;
pub mod reminders;
pub mod service;
pub mod status;
