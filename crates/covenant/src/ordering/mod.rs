//! The ordering capability and its value-type adapters.
//!
//! - [`Orderable`] — the strict total ordering every comparable value type
//!   exposes to the contract engine.
//! - [`Calendar`] — a legacy mutable calendar type whose adapter normalizes
//!   sub-second precision before comparing.

pub mod calendar;
pub mod orderable;

pub use calendar::Calendar;
pub use orderable::Orderable;
