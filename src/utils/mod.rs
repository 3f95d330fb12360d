//! Shared utilities.
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: token signing and verification
//! - [`password`]: password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
