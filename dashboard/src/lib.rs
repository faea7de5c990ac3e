//! User dashboard library modules.
//!
//! - [`domain`] holds the user model, state transitions, derived views, and
//!   the dashboard controller.
//! - [`outbound`] implements the user service port over HTTP.
//! - [`inbound`] drives the dashboard from a terminal.
//! - [`config`] loads connection settings.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::DashboardSettings;
