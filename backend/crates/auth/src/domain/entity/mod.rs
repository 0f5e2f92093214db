pub mod session_claims;
