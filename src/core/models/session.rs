use serde::{Deserialize, Serialize};

/// Bearer token issued by the auth service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Blank tokens are treated as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep tokens out of logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Response of `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

/// An authenticated user together with the credential that proved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: CurrentUser,
    pub credential: Credential,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_absent() {
        assert!(Credential::new("  ").is_none());
        let credential = Credential::new(" abc ").unwrap();
        assert_eq!(credential.authorization_header(), "Bearer abc");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }
}
