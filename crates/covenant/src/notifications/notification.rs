//! The notification record type.
//!
//! A [`Notification`] is one recorded validation failure: the property it
//! concerns and a human-readable message. It carries no identity beyond its
//! two fields, and duplicates are permitted.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// NOTIFICATION
// ============================================================================

/// A single validation failure record.
///
/// Uses `Cow<'static, str>` for zero-allocation when property names and
/// messages are known at compile time (the common case).
///
/// # Examples
///
/// ```
/// use covenant::Notification;
///
/// // Static strings — zero allocation:
/// let n = Notification::new("email", "Email is required");
/// assert_eq!(n.property(), "email");
/// assert_eq!(n.message(), "Email is required");
///
/// // Dynamic strings — allocates only when needed:
/// let n = Notification::new("age", format!("Age must be at least {}", 18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{property}: {message}")]
pub struct Notification {
    /// The field or identifier the failure concerns.
    property: Cow<'static, str>,

    /// Human-readable description of the failure.
    message: Cow<'static, str>,
}

impl Notification {
    /// Creates a new notification.
    ///
    /// Inputs are recorded verbatim; empty strings are permitted.
    pub fn new(
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }

    /// The property identifier this failure concerns.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_construction() {
        let n = Notification::new("name", "Name is required");
        assert_eq!(n.property(), "name");
        assert_eq!(n.message(), "Name is required");
    }

    #[test]
    fn test_empty_strings_permitted() {
        let n = Notification::new("", "");
        assert_eq!(n.property(), "");
        assert_eq!(n.message(), "");
    }

    #[test]
    fn test_display() {
        let n = Notification::new("date", "The date must be in the past");
        assert_eq!(n.to_string(), "date: The date must be in the past");
    }

    #[test]
    fn test_duplicates_are_equal() {
        let a = Notification::new("x", "bad");
        let b = Notification::new("x", "bad");
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let n = Notification::new("required", "This field is required");
        // Both should be borrowed (no allocation)
        assert!(matches!(n.property, Cow::Borrowed(_)));
        assert!(matches!(n.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_dynamic_strings() {
        let property = format!("items[{}]", 3);
        let n = Notification::new(property, "out of stock");
        assert!(matches!(n.property, Cow::Owned(_)));
        assert!(matches!(n.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_serde_round_trip() {
        let n = Notification::new("email", "Email is invalid");
        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
