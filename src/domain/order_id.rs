use std::fmt;

/// A user-supplied order identifier after normalization.
///
/// Guarantees:
/// - No leading or trailing whitespace
/// - No lowercase characters
///
/// An empty identifier is valid; it simply never matches a stored order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(String);

impl OrderId {
    /// Normalize raw input by trimming surrounding whitespace and uppercasing.
    pub fn normalize(raw: &str) -> Self {
        OrderId(raw.trim().to_uppercase())
    }

    /// Whether `key` is already in normalized form.
    ///
    /// Stored keys that are not normalized can never be reached by a lookup.
    pub fn is_normalized(key: &str) -> bool {
        Self::normalize(key).as_str() == key
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<OrderId> for String {
    fn from(val: OrderId) -> Self {
        val.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(OrderId::normalize("  ik12345\t").as_str(), "IK12345");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(OrderId::normalize("   ").as_str(), "");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(OrderId::normalize(" ik 123 ").as_str(), "IK 123");
    }

    #[test]
    fn detects_unreachable_keys() {
        assert!(OrderId::is_normalized("IK12345"));
        assert!(!OrderId::is_normalized("ik12345"));
        assert!(!OrderId::is_normalized(" IK12345"));
    }

    #[test]
    fn display_impl() {
        assert_eq!(format!("{}", OrderId::normalize("ik1")), "IK1");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in "\\PC{0,24}") {
            let once = OrderId::normalize(&raw);
            let twice = OrderId::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn padding_and_case_do_not_matter(id in "[A-Z0-9]{1,10}", pad in "[ \\t]{0,4}") {
            let padded = format!("{pad}{}{pad}", id.to_lowercase());
            let normalized = OrderId::normalize(&padded);
            prop_assert_eq!(normalized.as_str(), id.as_str());
        }
    }
}
