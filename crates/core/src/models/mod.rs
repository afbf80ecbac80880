pub mod alert;
pub mod holding;
pub mod report;
pub mod rule;
pub mod snapshot;
pub mod user;
