//! The authenticated principal carried inside an access token.

use serde::{Deserialize, Serialize};

use crate::errors::AuthError;

/// Role of a RecipeHub account.
///
/// Closed set: a role string that does not match one of these variants is
/// rejected with [`AuthError::UnknownRole`], never mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Platform administrator, manages categories and moderates recipes
    Admin,
    /// Regular member who publishes, rates and favorites recipes
    Customer,
}

impl Role {
    /// Wire name used in the `userType` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "CUSTOMER" => Ok(Role::Customer),
            other => Err(AuthError::UnknownRole {
                role: other.to_string(),
            }),
        }
    }
}

/// Decoded principal: who is calling and with which role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(
        user_id: i64,
        user_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this principal may mutate a resource owned by `owner_id`.
    ///
    /// Administrators may act on any resource.
    pub fn can_act_for(&self, owner_id: i64) -> bool {
        self.user_id == owner_id || self.is_admin()
    }
}
