pub mod alert;
pub mod error;
pub mod escalation;
pub mod ids;
pub mod schedule;
