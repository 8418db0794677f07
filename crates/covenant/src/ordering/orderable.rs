//! The strict total ordering capability and its adapters.
//!
//! Every value type the contract engine can compare exposes one uniform
//! three-way comparison through [`Orderable`]. Adapters delegate to the
//! type's intrinsic `Ord` wherever that ordering is already trustworthy;
//! the one exception is [`Calendar`](super::Calendar), whose adapter
//! normalizes sub-second precision first.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

// ============================================================================
// ORDERABLE
// ============================================================================

/// A strict total ordering over values of one type.
///
/// `compare` must be consistent and transitive: the contract engine relies
/// on it for every boundary decision, including equality-sensitive ones.
/// Passing a type without this capability to a comparison check fails at
/// compile time — there is no runtime type-error path.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use chrono::NaiveDate;
/// use covenant::Orderable;
///
/// let earlier = NaiveDate::from_ymd_opt(2019, 2, 1).unwrap();
/// let later = NaiveDate::from_ymd_opt(2019, 2, 10).unwrap();
///
/// assert_eq!(earlier.compare(&later), Ordering::Less);
/// assert_eq!(later.compare(&earlier), Ordering::Greater);
/// assert_eq!(earlier.compare(&earlier), Ordering::Equal);
/// ```
pub trait Orderable {
    /// Three-way comparison of `self` against `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

// ============================================================================
// ADAPTERS
// ============================================================================

/// Implements [`Orderable`] by delegating to the type's intrinsic `Ord`.
///
/// For types whose natural ordering is already at the precision callers
/// mean (nanosecond-level for the chrono types, exact for integers).
macro_rules! impl_orderable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Orderable for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )+
    };
}

// Date-only, time-only, and naive date-time values.
impl_orderable!(NaiveDate, NaiveTime, NaiveDateTime);

// The engine is ordering-generic, not temporal-specific. Floats stay out:
// `PartialOrd` is not a strict total order.
impl_orderable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Absolute instants (`DateTime<Utc>`) and zone-aware date-times
// (`DateTime<FixedOffset>`, `DateTime<Local>`). chrono orders these by the
// instant they denote, at nanosecond precision.
impl<Tz: TimeZone> Orderable for DateTime<Tz> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

// ============================================================================
// TESTS
// ============================================================================
