//! # Covenant
//!
//! A fluent, non-throwing validation engine built around the notification
//! pattern: validation failures are recorded in an ordered ledger instead of
//! raised as errors, so a whole chain of requirements always runs to the end
//! and callers read the complete list of failures afterwards.
//!
//! ## Core concepts
//!
//! - **[`Notification`]** — one recorded failure: a property and a message.
//! - **[`Notifications`]** — the ordered, append-only ledger of failures.
//!   An entity is valid exactly when its ledger is empty.
//! - **[`Notifiable`]** — the capability of owning a ledger. Implement two
//!   accessors and the merge and inspection surface comes for free.
//! - **[`Contract`]** — the fluent requirement chain. Each check evaluates
//!   one requirement against a value carrying a strict total ordering
//!   ([`Orderable`]) and records a failure when violated.
//! - **[`Calendar`]** — a legacy mutable calendar type compared at
//!   whole-second granularity.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use covenant::prelude::*;
//!
//! struct Booking {
//!     check_in: NaiveDate,
//!     check_out: NaiveDate,
//!     notifications: Notifications,
//! }
//!
//! impl Notifiable for Booking {
//!     fn notifications(&self) -> &Notifications {
//!         &self.notifications
//!     }
//!
//!     fn notifications_mut(&mut self) -> &mut Notifications {
//!         &mut self.notifications
//!     }
//! }
//!
//! let mut booking = Booking {
//!     check_in: NaiveDate::from_ymd_opt(2019, 2, 10).unwrap(),
//!     check_out: NaiveDate::from_ymd_opt(2019, 2, 8).unwrap(),
//!     notifications: Notifications::new(),
//! };
//!
//! let contract = Contract::requires().is_greater_than(
//!     &booking.check_out,
//!     &booking.check_in,
//!     "check_out",
//!     "Check-out must come after check-in",
//! );
//! booking.absorb(&contract);
//!
//! assert!(booking.is_invalid());
//! assert_eq!(booking.notifications().len(), 1);
//! ```

pub mod contract;
pub mod notifications;
pub mod ordering;
pub mod prelude;

pub use contract::Contract;
pub use notifications::{Notifiable, Notification, Notifications};
pub use ordering::{Calendar, Orderable};
