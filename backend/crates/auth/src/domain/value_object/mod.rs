pub mod session_role;
