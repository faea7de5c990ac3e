//! HTTP outbound adapters.
//!
//! This module provides a thin reqwest implementation of the `UserService`
//! port.

mod dto;
mod http_user_service;

pub use http_user_service::{HttpUserService, HttpUserServiceError};
