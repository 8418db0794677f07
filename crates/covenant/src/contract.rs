//! The fluent contract engine.
//!
//! A [`Contract`] is a builder over a notification ledger: each check
//! evaluates one requirement, records a failure when it is violated, and
//! returns the contract so checks chain. Violations are never thrown or
//! logged; every failed check is one more record, and the chain always runs
//! to the end.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use covenant::{Contract, Notifiable};
//!
//! let deadline = NaiveDate::from_ymd_opt(2019, 2, 10).unwrap();
//! let submitted = NaiveDate::from_ymd_opt(2019, 2, 15).unwrap();
//!
//! let contract = Contract::requires()
//!     .is_lower_or_equals_than(&submitted, &deadline, "submitted", "Submitted after deadline")
//!     .is_null_or_optional(Some(&submitted), "submitted", "Submission date is required");
//!
//! assert!(contract.is_invalid());
//! assert_eq!(contract.notifications().len(), 1);
//! ```

use std::borrow::Cow;

use crate::notifications::{Notifiable, Notifications};
use crate::ordering::Orderable;

// ============================================================================
// CONTRACT
// ============================================================================

/// A fluent, non-throwing requirement chain over a notification ledger.
///
/// Checks take the contract by value and return it, so a chain reads as one
/// expression. The ledger only grows: a passing check appends nothing, a
/// failing check appends exactly one record, and no check ever aborts the
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    notifications: Notifications,
}

impl Contract {
    /// Starts a new requirement chain with an empty ledger.
    #[must_use]
    pub fn requires() -> Self {
        Self::default()
    }

    /// Starts a chain over an existing ledger, preserving its records.
    #[must_use]
    pub fn over(notifications: Notifications) -> Self {
        Self { notifications }
    }

    /// Finishes the chain, yielding the accumulated ledger.
    #[must_use]
    pub fn into_notifications(self) -> Notifications {
        self.notifications
    }

    fn record(
        mut self,
        violated: bool,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        if violated {
            self.notifications.add(property, message);
        }
        self
    }

    // ===== ORDERING CHECKS =====

    /// Requires `value` to be strictly greater than `comparer`.
    ///
    /// Equal values violate the requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_greater_than<T: Orderable>(
        self,
        value: &T,
        comparer: &T,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.record(!value.compare(comparer).is_gt(), property, message)
    }

    /// Requires `value` to be greater than or equal to `comparer`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_greater_or_equals_than<T: Orderable>(
        self,
        value: &T,
        comparer: &T,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.record(value.compare(comparer).is_lt(), property, message)
    }

    /// Requires `value` to be strictly lower than `comparer`.
    ///
    /// Equal values violate the requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_lower_than<T: Orderable>(
        self,
        value: &T,
        comparer: &T,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.record(!value.compare(comparer).is_lt(), property, message)
    }

    /// Requires `value` to be lower than or equal to `comparer`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_lower_or_equals_than<T: Orderable>(
        self,
        value: &T,
        comparer: &T,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.record(value.compare(comparer).is_gt(), property, message)
    }

    /// Requires `value` to lie strictly between `from` and `to`.
    ///
    /// Both endpoints are exclusive: a value equal to either endpoint
    /// violates the requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_between<T: Orderable>(
        self,
        value: &T,
        from: &T,
        to: &T,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let inside = from.compare(value).is_lt() && value.compare(to).is_lt();
        self.record(!inside, property, message)
    }

    // ===== PRESENCE CHECKS =====

    /// Requires `value` to be present: `None` violates the requirement.
    ///
    /// The name is historical and inverted relative to what the check does;
    /// it is kept for compatibility with the validation vocabulary callers
    /// already use.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_null_or_optional<T>(
        self,
        value: Option<&T>,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.record(value.is_none(), property, message)
    }
}

impl Notifiable for Contract {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }
}

// ============================================================================
// TESTS
// ============================================================================
