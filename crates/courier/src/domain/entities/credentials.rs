//! Credentials - Basic authentication pair

use std::fmt;

/// Username/password pair
///
/// `Debug` redacts the password so credentials can sit in logged structs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Split decoded `username:password` text on the first colon
    pub fn from_pair(decoded: &str) -> Option<Self> {
        decoded
            .split_once(':')
            .map(|(username, password)| Self::new(username, password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair_splits_on_first_colon() {
        let creds = Credentials::from_pair("hook:pa:ss").unwrap();
        assert_eq!(creds.username, "hook");
        assert_eq!(creds.password, "pa:ss");
    }

    #[test]
    fn test_from_pair_requires_colon() {
        assert!(Credentials::from_pair("nocolon").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("hook", "secret"));
        assert!(rendered.contains("hook"));
        assert!(!rendered.contains("secret"));
    }
}
