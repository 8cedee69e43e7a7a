use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::ZeroizeOnDrop;

/// A string wrapper for key secrets and access tokens that zeroizes its
/// buffer on drop and never prints its content
#[derive(ZeroizeOnDrop)]
pub struct SecureString {
    data: Vec<u8>,
}

impl SecureString {
    pub fn new(s: String) -> Self {
        Self {
            data: s.into_bytes(),
        }
    }

    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Borrow the secret. Always valid UTF-8 since it is only built from strings.
    pub fn expose(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First `len` characters of the secret, for display
    pub fn preview(&self, len: usize) -> String {
        self.expose().chars().take(len).collect()
    }

    /// Constant-time comparison
    pub fn secure_eq(&self, other: &SecureString) -> bool {
        use subtle::ConstantTimeEq;

        if self.data.len() != other.data.len() {
            return false;
        }

        self.data.ct_eq(&other.data).into()
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.secure_eq(other)
    }
}

impl Eq for SecureString {}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("data", &"[REDACTED]")
            .field("len", &self.data.len())
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED SecureString of {} bytes]", self.data.len())
    }
}

impl Clone for SecureString {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl Serialize for SecureString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecureString::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_creation() {
        let s = SecureString::from("test token");
        assert_eq!(s.expose().len(), 10);
        assert!(!s.is_empty());
        assert_eq!(s.expose(), "test token");
    }

    #[test]
    fn test_secure_string_eq() {
        let s1 = SecureString::from("token123");
        let s2 = SecureString::from("token123");
        let s3 = SecureString::from("different");

        assert!(s1.secure_eq(&s2));
        assert!(!s1.secure_eq(&s3));
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_secure_string_debug_and_display_are_redacted() {
        let s = SecureString::from("secret");
        assert!(format!("{:?}", s).contains("[REDACTED]"));
        assert!(!format!("{:?}", s).contains("secret"));
        assert!(!format!("{}", s).contains("secret"));
    }

    #[test]
    fn test_preview_counts_characters() {
        let s = SecureString::from("äbcdefgh");
        assert_eq!(s.preview(3), "äbc");
        assert_eq!(s.preview(100), "äbcdefgh");
    }

    #[test]
    fn test_serde_is_transparent() {
        let s: SecureString = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(s.expose(), "abc");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_empty_secure_string() {
        let s = SecureString::empty();
        assert!(s.is_empty());
        assert_eq!(s.expose(), "");
    }
}
