//! Notification rules - pure decision logic with no I/O

mod banner_rules;

pub use banner_rules::{evaluate, template, MIN_TEAM_SIZE};
