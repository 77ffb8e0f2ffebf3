//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Request DTOs convert into the domain input structs
//! once validated; response DTOs are built from domain entities.

pub mod auth;
pub mod common;
pub mod health;
pub mod obstetric;
pub mod patient;
pub mod pay;
pub mod record;
pub mod user;
