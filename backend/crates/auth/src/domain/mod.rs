//! Domain Layer
//!
//! Session role and token claims. No I/O.

pub mod entity;
pub mod value_object;

pub use entity::session_claims::SessionClaims;
pub use value_object::session_role::SessionRole;
