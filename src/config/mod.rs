//! Application configuration.
//!
//! Each submodule covers one concern, loaded from environment variables
//! at startup:
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool
//! - [`jwt`]: token signing secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
