use serde::{Serialize, Deserialize, Serializer};
use std::fmt;

/// A wrapper for contact details that masks its value in Debug and Display output.
///
/// Serialization still writes the real value: mail bodies need it. Only log macros are guarded.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

/// `shop@example.com` -> `s***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Keeps the last four digits only.
pub fn mask_mobile(mobile: &str) -> String {
    let digits: Vec<char> = mobile.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(digits.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_value_in_logs() {
        let secret = Masked("9876543210".to_string());
        assert_eq!(format!("{:?}", secret), "********");
        assert_eq!(format!("{}", secret), "********");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"9876543210\"");
    }

    #[test]
    fn test_partial_masks() {
        assert_eq!(mask_email("arun@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_mobile("+91 98765 43210"), "********3210");
        assert_eq!(mask_mobile("12"), "**");
    }
}
