//! The identity driving catalog mutations.
//!
//! Mutation permissions are decided per call from an explicit [`Actor`]
//! value rather than ambient session state. A missing actor is a valid,
//! handled condition (all mutating affordances disabled), not an error in
//! the type layer.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// Role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper: may rate products and add them to a cart.
    #[default]
    Customer,
    /// Store administrator: may edit and delete products.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// The current user, as supplied by an external session collaborator.
///
/// Minimal identity carried into every mutating catalog call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User's service-assigned ID.
    pub id: UserId,
    /// User's role/permission level.
    pub role: Role,
}

impl Actor {
    /// Create an actor from an id and a role.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// Whether this actor holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_roundtrip() {
        for role in [Role::Customer, Role::Admin] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_default_is_customer() {
        assert_eq!(Role::default(), Role::Customer);
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn test_actor_is_admin() {
        let admin = Actor::new(UserId::new("u-1"), Role::Admin);
        let customer = Actor::new(UserId::new("u-2"), Role::Customer);
        assert!(admin.is_admin());
        assert!(!customer.is_admin());
    }
}
