//! Session context
//!
//! The auth collaborator hands over one [`UserDetails`] after login; every
//! screen receives the resulting [`UserSession`] explicitly instead of
//! reading ambient global state. The session never changes while the user
//! is logged in.

use shared::client::UserDetails;

/// User role within the business
///
/// Owners see the whole business; every other role is a limited member
/// whose vendor listings are scoped to their own team-member identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Member,
}

impl Role {
    /// Parse the backend's role string (`"owner"` grants owner scope)
    pub fn from_role_str(role: &str) -> Self {
        if role.eq_ignore_ascii_case("owner") {
            Self::Owner
        } else {
            Self::Member
        }
    }

    pub fn is_owner(self) -> bool {
        matches!(self, Self::Owner)
    }
}

/// Read-only session context shared by all screens
#[derive(Debug, Clone)]
pub struct UserSession {
    details: UserDetails,
    role: Role,
}

impl UserSession {
    pub fn new(details: UserDetails) -> Self {
        let role = Role::from_role_str(&details.user_role);
        Self { details, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }

    /// Business identifier, if the session has one yet
    ///
    /// Screens treat `None` as "not ready" and defer their fetches.
    pub fn business_id(&self) -> Option<i64> {
        self.details.business_id
    }

    /// Business identifier string-encoded for the wire
    pub fn business_id_str(&self) -> Option<String> {
        self.details.business_id.map(|id| id.to_string())
    }

    /// Team-member identifier string-encoded for the wire
    pub fn team_contact_id_str(&self) -> Option<String> {
        self.details.team_contact_id.map(|id| id.to_string())
    }

    /// Account identifier used for navigation links
    pub fn account_id(&self) -> Option<i64> {
        self.details.account_id
    }
}
