//! Business logic services

mod auth;

pub use auth::{AuthService, Authenticated};
