//! Convenient re-exports for the common case.
//!
//! ```
//! use covenant::prelude::*;
//!
//! let contract = Contract::requires().is_greater_than(&10, &1, "x", "too small");
//! assert!(contract.is_valid());
//! ```

pub use crate::contract::Contract;
pub use crate::notifications::{Notifiable, Notification, Notifications};
pub use crate::ordering::{Calendar, Orderable};
