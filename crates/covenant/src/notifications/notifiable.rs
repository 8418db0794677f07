//! The notification ledger and the ledger-bearing capability.
//!
//! [`Notifications`] is an ordered, append-only collection of failure
//! records. It only ever grows: there is no removal or reset operation, so
//! "monotonically growing" is a structural guarantee rather than a
//! convention. [`Notifiable`] is the capability implemented by validated
//! entities that own such a ledger, and is what lets results be merged,
//! nested, and queried uniformly across entity types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Notification;

// ============================================================================
// NOTIFICATIONS (THE LEDGER)
// ============================================================================

/// An ordered, append-only ledger of validation failures.
///
/// Insertion order is preserved and duplicates are permitted. Validity is
/// simply "the ledger is empty"; both [`is_valid`](Notifications::is_valid)
/// and [`is_invalid`](Notifications::is_invalid) are O(1).
///
/// # Examples
///
/// ```
/// use covenant::Notifications;
///
/// let mut ledger = Notifications::new();
/// assert!(ledger.is_valid());
///
/// ledger.add("email", "Email is required");
/// ledger.add("age", "Age must be positive");
///
/// assert!(ledger.is_invalid());
/// assert_eq!(ledger.len(), 2);
/// assert_eq!(ledger.as_slice()[0].property(), "email");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    records: Vec<Notification>,
}

impl Notifications {
    /// Creates a new, empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the recorded failures as an ordered, read-only slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Notification] {
        &self.records
    }

    /// Iterates over the recorded failures in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.records.iter()
    }

    /// Returns the number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if no failure has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if at least one failure has been recorded.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.records.is_empty()
    }

    /// Appends one failure record built from a property and a message.
    ///
    /// Always succeeds; inputs are recorded verbatim and empty strings are
    /// permitted.
    pub fn add(
        &mut self,
        property: impl Into<std::borrow::Cow<'static, str>>,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) {
        self.records.push(Notification::new(property, message));
    }

    /// Appends one prebuilt failure record.
    pub fn push(&mut self, notification: Notification) {
        self.records.push(notification);
    }
}

impl Extend<Notification> for Notifications {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<Notification> for Notifications {
    fn from_iter<I: IntoIterator<Item = Notification>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notifications {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "no notifications");
        }
        writeln!(f, "{} notification(s):", self.records.len())?;
        for (i, notification) in self.records.iter().enumerate() {
            writeln!(f, "  {}. {notification}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for Notifications {}

// ============================================================================
// NOTIFIABLE (THE LEDGER-BEARING CAPABILITY)
// ============================================================================

/// The capability of owning a notification ledger.
///
/// Implement the two accessors on a validated entity and the merge and
/// inspection surface comes for free. Merging copies records into the
/// target's sequence — ownership of each record stays with whichever ledger
/// currently holds it, and later changes to the source are not reflected.
///
/// # Examples
///
/// ```
/// use covenant::{Notifiable, Notifications};
///
/// struct Customer {
///     name: String,
///     notifications: Notifications,
/// }
///
/// impl Notifiable for Customer {
///     fn notifications(&self) -> &Notifications {
///         &self.notifications
///     }
///
///     fn notifications_mut(&mut self) -> &mut Notifications {
///         &mut self.notifications
///     }
/// }
///
/// let mut customer = Customer {
///     name: String::new(),
///     notifications: Notifications::new(),
/// };
/// if customer.name.is_empty() {
///     customer.notify("name", "Name is required");
/// }
/// assert!(customer.is_invalid());
/// ```
pub trait Notifiable {
    /// The entity's ledger, as an ordered, read-only view.
    fn notifications(&self) -> &Notifications;

    /// The entity's ledger, for appending through the defined operations.
    fn notifications_mut(&mut self) -> &mut Notifications;

    /// Returns true if the ledger is empty.
    fn is_valid(&self) -> bool {
        self.notifications().is_valid()
    }

    /// Returns true if the ledger holds at least one record.
    fn is_invalid(&self) -> bool {
        self.notifications().is_invalid()
    }

    /// Appends one failure record.
    fn notify(
        &mut self,
        property: impl Into<std::borrow::Cow<'static, str>>,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) where
        Self: Sized,
    {
        self.notifications_mut().add(property, message);
    }

    /// Appends a snapshot of another entity's current records.
    ///
    /// Records are copied in the source's insertion order, after any records
    /// already held. Later changes to `other` are not reflected here.
    fn absorb<N>(&mut self, other: &N)
    where
        Self: Sized,
        N: Notifiable + ?Sized,
    {
        let snapshot: Vec<Notification> = other.notifications().iter().cloned().collect();
        self.notifications_mut().extend(snapshot);
    }

    /// Permissive variant of [`absorb`](Notifiable::absorb): `None` is a
    /// no-op merge, not a fault.
    ///
    /// Aggregation of composite entities should be maximally tolerant of
    /// incomplete inputs.
    fn absorb_opt<N>(&mut self, other: Option<&N>)
    where
        Self: Sized,
        N: Notifiable + ?Sized,
    {
        if let Some(other) = other {
            self.absorb(other);
        }
    }

    /// Appends the records of nested batches of entities, flattened in
    /// stable outer-then-inner order.
    ///
    /// This is the merge used when validating aggregates whose constituents
    /// arrive as groups (e.g. a list of lists of sub-entities).
    fn absorb_groups<'a, G, I, N>(&mut self, groups: G)
    where
        Self: Sized,
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = &'a N>,
        N: Notifiable + 'a,
    {
        for group in groups {
            for entity in group {
                self.absorb(entity);
            }
        }
    }
}

// A bare ledger composes like any other validated entity.
impl Notifiable for Notifications {
    fn notifications(&self) -> &Notifications {
        self
    }

    fn notifications_mut(&mut self) -> &mut Notifications {
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ledger_of(pairs: &[(&'static str, &'static str)]) -> Notifications {
        let mut ledger = Notifications::new();
        for (property, message) in pairs {
            ledger.add(*property, *message);
        }
        ledger
    }

    #[test]
    fn test_new_ledger_is_valid() {
        let ledger = Notifications::new();
        assert!(ledger.is_valid());
        assert!(!ledger.is_invalid());
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let ledger = ledger_of(&[("a", "first"), ("b", "second"), ("c", "third")]);
        let properties: Vec<&str> = ledger.iter().map(Notification::property).collect();
        assert_eq!(properties, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let ledger = ledger_of(&[("a", "same"), ("a", "same")]);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_validity_flags_are_complementary() {
        let mut ledger = Notifications::new();
        assert_eq!(ledger.is_valid(), !ledger.is_invalid());
        ledger.add("x", "failed");
        assert_eq!(ledger.is_valid(), !ledger.is_invalid());
        assert!(ledger.is_invalid());
    }

    #[test]
    fn test_extend_appends_in_iteration_order() {
        let mut ledger = ledger_of(&[("a", "1")]);
        ledger.extend(vec![
            Notification::new("b", "2"),
            Notification::new("c", "3"),
        ]);
        let properties: Vec<&str> = ledger.iter().map(Notification::property).collect();
        assert_eq!(properties, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_absorb_is_a_snapshot() {
        let mut target = ledger_of(&[("a", "1")]);
        let mut source = ledger_of(&[("b", "2")]);

        target.absorb(&source);
        source.add("c", "3"); // must not appear in target

        assert_eq!(target.len(), 2);
        let properties: Vec<&str> = target.iter().map(Notification::property).collect();
        assert_eq!(properties, vec!["a", "b"]);
    }

    #[test]
    fn test_absorb_preserves_both_orders() {
        let mut target = ledger_of(&[("a1", "x"), ("a2", "x")]);
        let source = ledger_of(&[("b1", "x"), ("b2", "x"), ("b3", "x")]);

        target.absorb(&source);

        assert_eq!(target.len(), 5);
        let properties: Vec<&str> = target.iter().map(Notification::property).collect();
        assert_eq!(properties, vec!["a1", "a2", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_absorb_opt_none_is_noop() {
        let mut target = ledger_of(&[("a", "1")]);
        target.absorb_opt(None::<&Notifications>);
        assert_eq!(target.len(), 1);

        let source = ledger_of(&[("b", "2")]);
        target.absorb_opt(Some(&source));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_absorb_groups_flattens_outer_then_inner() {
        let mut target = Notifications::new();
        let a = ledger_of(&[("g1-a", "x")]);
        let b = ledger_of(&[("g1-b", "x")]);
        let c = ledger_of(&[("g2-c", "x")]);

        target.absorb_groups(vec![vec![&a, &b], vec![&c]]);

        let properties: Vec<&str> = target.iter().map(Notification::property).collect();
        assert_eq!(properties, vec!["g1-a", "g1-b", "g2-c"]);
    }

    #[test]
    fn test_from_iterator() {
        let ledger: Notifications = vec![
            Notification::new("a", "1"),
            Notification::new("b", "2"),
        ]
        .into_iter()
        .collect();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_display_empty() {
        let ledger = Notifications::new();
        assert_eq!(ledger.to_string(), "no notifications");
    }

    #[test]
    fn test_display_lists_records() {
        let ledger = ledger_of(&[("a", "first"), ("b", "second")]);
        let rendered = ledger.to_string();
        assert!(rendered.starts_with("2 notification(s):"));
        assert!(rendered.contains("1. a: first"));
        assert!(rendered.contains("2. b: second"));
    }
}
