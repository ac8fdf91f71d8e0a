use serde::{Deserialize, Serialize};

/// Identity claims handed over by the upstream authentication provider.
///
/// The role is kept as the raw claim string; it is only interpreted when the
/// identity is turned into a domain actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    subject: String,
    email: String,
    role: String,
}

impl UserIdentity {
    /// Creates a user identity from authentication claims.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Returns the stable subject claim from the identity provider.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the email claim.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the raw role claim.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}
