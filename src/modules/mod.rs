//! Feature modules, one per resource.
//!
//! Each module follows the same structure: `controller.rs` (HTTP
//! handlers), `service.rs` (business logic and queries), `model.rs`
//! (entities and DTOs), `router.rs` (route registration).

pub mod auth;
pub mod categories;
pub mod coaches;
pub mod profile;
pub mod sessions;
pub mod users;
