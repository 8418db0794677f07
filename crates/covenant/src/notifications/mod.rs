//! The notification ledger: failure records and their composition protocol.
//!
//! - [`Notification`] — one recorded validation failure (property + message).
//! - [`Notifications`] — the ordered, append-only ledger owned by a
//!   validated entity.
//! - [`Notifiable`] — the capability that lets ledgers be merged, nested,
//!   and queried uniformly across entity types.

pub mod notifiable;
pub mod notification;

pub use notifiable::{Notifiable, Notifications};
pub use notification::Notification;
