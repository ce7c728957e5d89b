//! BDD step definitions for the alert sender

pub mod body_steps;
pub mod event_steps;
pub mod priority_steps;
pub mod title_steps;
