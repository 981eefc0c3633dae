use serde::Deserialize;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A cleartext account secret that is zeroized when dropped.
///
/// `Debug` never prints the content, and comparisons run in constant time
/// with respect to the bytes of equal-length inputs.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exact comparison against a presented secret.
    pub fn matches(&self, presented: &str) -> bool {
        self.0.as_bytes().ct_eq(presented.as_bytes()).into()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self(secret.to_string())
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for Credential {}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("len", &self.0.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exactly() {
        let cred = Credential::new("pw");
        assert!(cred.matches("pw"));
        assert!(!cred.matches("pw "));
        assert!(!cred.matches("PW"));
        assert!(!cred.matches(""));
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("hunter2");
        let out = format!("{cred:?}");
        assert!(!out.contains("hunter2"));
        assert!(out.contains("len"));
    }
}
