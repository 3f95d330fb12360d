//! Request-chain middleware.
//!
//! Every protected route runs the same fail-fast chain: the [`auth`]
//! extractor validates the bearer token and attaches the caller's
//! identity, then a [`role`] gate compares that identity against the
//! targeted resource before the handler runs. A failure at any stage
//! aborts the request immediately.
//!
//! # Authentication flow
//!
//! 1. Client sends `Authorization: <token>` (raw token, no scheme prefix)
//! 2. [`auth::AuthUser`] verifies the token and extracts the subject id
//! 3. A role gate ([`role::require_admin`], [`role::RequireCoachSelf`], ...)
//!    checks the caller's role and ownership of the targeted resource
//! 4. The handler executes if all checks pass

pub mod auth;
pub mod role;
