//! FullToss Core - Shared types library.
//!
//! This crate provides the common types used across the FullToss admin
//! portal components:
//! - `admin` - The operator-facing portal (OTP login + retailer dashboard)
//! - `integration-tests` - End-to-end tests against an in-process stub backend
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! HTTP clients, no session handling. This keeps it lightweight and allows
//! it to be used anywhere, including inside the stub backend used by tests.
//!
//! # Modules
//!
//! - [`types`] - Wire-shape records for retailers, orders, and tickets,
//!   plus the [`types::PhoneNumber`] newtype
//! - [`stats`] - Per-retailer sales aggregation ([`stats::RetailerStats`])

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod stats;
pub mod types;

pub use stats::RetailerStats;
pub use types::*;
