//! End-to-end tests for the SMS OTP login flow.
//!
//! Drives the portal over HTTP with a cookie-keeping client. The POST
//! endpoints redirect back to the login page; reqwest follows the
//! redirect, so each response body is the re-rendered login page.

use std::sync::atomic::Ordering;

use fulltoss_integration_tests::{
    VALID_OTP, browser_client, spawn_counting_stub_backend, spawn_portal, spawn_stub_backend,
    unreachable_backend_url,
};

// ============================================================================
// Requesting a code
// ============================================================================

#[tokio::test]
async fn test_request_code_success_shows_message_and_countdown() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    let resp = client
        .post(format!("{portal}auth/otp/request"))
        .form(&[("country_code", "+91"), ("phone_number", "9876543210")])
        .send()
        .await
        .expect("request failed");

    assert!(resp.status().is_success());
    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Verification code sent!"));
    // Resend is disabled while the 30s cooldown runs.
    assert!(body.contains("Resend in"));
    assert!(!body.contains("Send Verification Code"));
}

#[tokio::test]
async fn test_request_code_declined_keeps_resend_enabled() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    // The stub declines numbers ending in 0000.
    let resp = client
        .post(format!("{portal}auth/otp/request"))
        .form(&[("country_code", "+91"), ("phone_number", "9876540000")])
        .send()
        .await
        .expect("request failed");

    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Failed to send verification code."));
    // No cooldown started: the send button is still there.
    assert!(body.contains("Send Verification Code"));
    assert!(!body.contains("Resend in"));
}

#[tokio::test]
async fn test_request_code_transport_error_shows_generic_message() {
    let backend = unreachable_backend_url().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    let resp = client
        .post(format!("{portal}auth/otp/request"))
        .form(&[("country_code", "+91"), ("phone_number", "9876543210")])
        .send()
        .await
        .expect("request failed");

    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("An error occurred."));
    assert!(body.contains("Send Verification Code"));
}

#[tokio::test]
async fn test_pending_cooldown_refuses_resend() {
    let (backend, hits) = spawn_counting_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    // Two back-to-back requests: the second lands inside the 30s cooldown
    // and must not reach the backend.
    for _ in 0..2 {
        let resp = client
            .post(format!("{portal}auth/otp/request"))
            .form(&[("country_code", "+91"), ("phone_number", "9876543210")])
            .send()
            .await
            .expect("request failed");

        let body = resp.text().await.expect("failed to read body");
        assert!(body.contains("Resend in"));
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_typed_number_survives_the_redirect() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    let resp = client
        .post(format!("{portal}auth/otp/request"))
        .form(&[("country_code", "+44"), ("phone_number", "7700900123")])
        .send()
        .await
        .expect("request failed");

    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("value=\"7700900123\""));
    assert!(body.contains("<option value=\"+44\" selected>"));
}

// ============================================================================
// Verifying a code
// ============================================================================

#[tokio::test]
async fn test_verify_success_logs_the_operator_in() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    let resp = client
        .post(format!("{portal}auth/otp/verify"))
        .form(&[
            ("country_code", "+91"),
            ("phone_number", "9876543210"),
            ("code", VALID_OTP),
        ])
        .send()
        .await
        .expect("request failed");

    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Phone number verified successfully!"));
    // The header now shows the concatenated phone and a logout button.
    assert!(body.contains("+919876543210"));
    assert!(body.contains("Logout"));
}

#[tokio::test]
async fn test_verify_wrong_code_shows_invalid_message() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    let resp = client
        .post(format!("{portal}auth/otp/verify"))
        .form(&[
            ("country_code", "+91"),
            ("phone_number", "9876543210"),
            ("code", "999999"),
        ])
        .send()
        .await
        .expect("request failed");

    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Invalid verification code."));
    assert!(!body.contains("Logout"));
}

#[tokio::test]
async fn test_flash_message_is_one_shot() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    let resp = client
        .post(format!("{portal}auth/otp/verify"))
        .form(&[
            ("country_code", "+91"),
            ("phone_number", "9876543210"),
            ("code", "999999"),
        ])
        .send()
        .await
        .expect("request failed");
    let body = resp.text().await.expect("failed to read body");
    assert!(body.contains("Invalid verification code."));

    // A fresh GET has consumed the flash.
    let resp = client
        .get(format!("{portal}auth/login"))
        .send()
        .await
        .expect("request failed");
    let body = resp.text().await.expect("failed to read body");
    assert!(!body.contains("Invalid verification code."));
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_clears_the_operator() {
    let backend = spawn_stub_backend().await;
    let portal = spawn_portal(backend).await;
    let client = browser_client();

    // Log in.
    client
        .post(format!("{portal}auth/otp/verify"))
        .form(&[
            ("country_code", "+91"),
            ("phone_number", "9876543210"),
            ("code", VALID_OTP),
        ])
        .send()
        .await
        .expect("request failed");

    // Log out.
    let resp = client
        .post(format!("{portal}auth/logout"))
        .send()
        .await
        .expect("request failed");

    let body = resp.text().await.expect("failed to read body");
    assert!(!body.contains("+919876543210"));
    assert!(!body.contains("Logout"));
}
