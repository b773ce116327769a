pub mod contract;
pub mod note;
pub mod ports;
