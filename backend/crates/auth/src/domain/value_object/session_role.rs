use serde::{Deserialize, Serialize};
use std::fmt;

/// Role asserted by a session token
///
/// The blog has exactly one authenticated role. Keeping it an enum means a
/// token carrying any other `role` claim fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Admin,
}

impl SessionRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            SessionRole::Admin => "admin",
        }
    }
}

impl fmt::Display for SessionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
