//! Session-related types for operator authentication.
//!
//! The session is the portal's only shared state: the logged-in operator
//! (phone number plus the implied "is logged in" flag), the resend
//! cooldown, the in-progress login form values, and the one-shot flash
//! message. Each concern has a single session key and a single writer.

use serde::{Deserialize, Serialize};

use fulltoss_core::PhoneNumber;

/// Session-stored operator identity.
///
/// Presence of this record in the session *is* the authenticated flag;
/// no token or server-verifiable credential is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentOperator {
    /// The verified phone number the operator logged in with.
    pub phone: PhoneNumber,
}

/// Login form values carried across the request-code redirect, so the
/// operator does not retype the number when entering the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingLogin {
    /// Selected country-code prefix (e.g. "+91").
    pub country_code: String,
    /// National number as typed.
    pub phone_number: String,
}

/// Session keys for operator authentication data.
pub mod keys {
    /// Key for storing the current logged-in operator.
    pub const CURRENT_OPERATOR: &str = "current_operator";

    /// Key for the OTP resend cooldown.
    pub const OTP_COOLDOWN: &str = "otp_cooldown";

    /// Key for the in-progress login form values.
    pub const PENDING_LOGIN: &str = "pending_login";

    /// Key for the one-shot flash message shown on the login page.
    pub const LOGIN_FLASH: &str = "login_flash";
}
