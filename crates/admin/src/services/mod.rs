//! Business services for the admin portal.

pub mod otp;
