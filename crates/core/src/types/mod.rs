//! Core types for the FullToss admin portal.
//!
//! These mirror the wire shape of the upstream FullToss backend responses,
//! so they deserialize straight off the `/retailersData` payload.

pub mod phone;
pub mod retailer;

pub use phone::PhoneNumber;
pub use retailer::{OrderHistoryItem, OrderItem, Retailer, Ticket};
