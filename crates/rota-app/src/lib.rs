pub mod alert_service;
pub mod error;
mod remote;
pub mod roster_service;
