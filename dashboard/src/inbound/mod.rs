//! Inbound adapters driving the dashboard.

pub mod terminal;
