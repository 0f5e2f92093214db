//! Infrastructure Layer
//!
//! Token signing backed by `jsonwebtoken`.

pub mod jwt;

pub use jwt::{JwtSessionCodec, TokenRejection};
