//! Shared Kernel - vocabulary shared by every blog backend crate
//!
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed ID wrappers
//!
//! Only things whose meaning is identical across content, auth,
//! engagement and summary belong here.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "axum")]
    pub mod conversions;
    pub mod kind;
}
pub mod id;
