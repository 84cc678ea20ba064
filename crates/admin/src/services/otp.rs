//! OTP login flow: outcome mapping and the resend cooldown.
//!
//! The flow itself is two backend calls (`generateOtp`, `verifyOtp`).
//! This module keeps the pure parts out of the route handlers: mapping a
//! backend result to a user-visible message, and the resend [`Cooldown`].
//!
//! The cooldown is purely cosmetic with respect to the backend's own rate
//! limiting: it only governs whether the portal is willing to re-send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::BackendError;

/// Flash message texts shown on the login page.
pub const MSG_CODE_SENT: &str = "Verification code sent!";
pub const MSG_SEND_FAILED: &str = "Failed to send verification code.";
pub const MSG_VERIFIED: &str = "Phone number verified successfully!";
pub const MSG_INVALID_CODE: &str = "Invalid verification code.";
pub const MSG_ERROR: &str = "An error occurred.";

/// How long resend stays disabled after a code is sent.
pub const RESEND_COOLDOWN_SECS: i64 = 30;

/// A resend cooldown with an explicit start / remaining / elapsed contract.
///
/// Clock-injected: every query takes `now`, so behavior is deterministic
/// under test and independent of any rendering framework. Cancellation is
/// dropping the value (the session entry is simply removed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    started_at: DateTime<Utc>,
    duration_secs: i64,
}

impl Cooldown {
    /// Start a cooldown of `duration_secs` at `now`.
    #[must_use]
    pub const fn start(now: DateTime<Utc>, duration_secs: i64) -> Self {
        Self {
            started_at: now,
            duration_secs,
        }
    }

    /// Whole seconds remaining at `now`; zero once elapsed.
    #[must_use]
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = now.signed_duration_since(self.started_at).num_seconds();
        (self.duration_secs - elapsed).max(0)
    }

    /// Whether the cooldown has run out at `now`.
    #[must_use]
    pub fn is_elapsed(&self, now: DateTime<Utc>) -> bool {
        self.remaining_secs(now) == 0
    }
}

/// Outcome of asking the backend to send a verification code.
#[derive(Debug)]
pub enum SendOutcome {
    /// Backend declared success; resend is disabled while the cooldown runs.
    Sent(Cooldown),
    /// Backend declared failure; no cooldown, resend stays enabled.
    Declined,
    /// Transport or protocol error.
    Failed(BackendError),
}

impl SendOutcome {
    /// Map a backend `generateOtp` result to an outcome, starting the
    /// cooldown on declared success.
    #[must_use]
    pub fn from_result(result: Result<bool, BackendError>, now: DateTime<Utc>) -> Self {
        match result {
            Ok(true) => Self::Sent(Cooldown::start(now, RESEND_COOLDOWN_SECS)),
            Ok(false) => Self::Declined,
            Err(e) => Self::Failed(e),
        }
    }

    /// The flash message shown for this outcome.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Sent(_) => MSG_CODE_SENT,
            Self::Declined => MSG_SEND_FAILED,
            Self::Failed(_) => MSG_ERROR,
        }
    }
}

/// Outcome of submitting a verification code.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// Backend accepted the code; the operator is now logged in.
    Verified,
    /// Backend rejected the code.
    Declined,
    /// Transport or protocol error.
    Failed(BackendError),
}

impl VerifyOutcome {
    /// Map a backend `verifyOtp` result to an outcome.
    #[must_use]
    pub fn from_result(result: Result<bool, BackendError>) -> Self {
        match result {
            Ok(true) => Self::Verified,
            Ok(false) => Self::Declined,
            Err(e) => Self::Failed(e),
        }
    }

    /// The flash message shown for this outcome.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Verified => MSG_VERIFIED,
            Self::Declined => MSG_INVALID_CODE,
            Self::Failed(_) => MSG_ERROR,
        }
    }
}
