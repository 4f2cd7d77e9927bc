//! Certification recommendations for students.
//!
//! The core ([`services`]) turns a student profile and a catalog of
//! certification records into a ranked, filtered shortlist. The [`api`]
//! module exposes it over HTTP together with in-memory session state.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult, ConfigurationError};
