//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Fixed-window rate limiting with an injectable store
//! - Cookie management
//! - Client identification (IP extraction)
//! - Constant-time secret comparison

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod rate_limit;
