//! Integration test support for the FullToss admin portal.
//!
//! Everything runs in-process: [`spawn_stub_backend`] serves a small axum
//! router that impersonates the upstream FullToss backend on an ephemeral
//! port, and [`spawn_portal`] serves the real portal app pointed at it.
//! Tests then drive the portal over HTTP with a cookie-keeping reqwest
//! client, exactly like a browser would.
//!
//! # Stub backend behavior
//!
//! - `POST /generateOtp` - declares success unless the phone number ends
//!   in `0000` (the "backend declined" case)
//! - `POST /verifyOtp` - accepts only the code [`VALID_OTP`]
//! - `GET /retailersData` - serves [`fixture_retailers`]

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router, routing::get, routing::post};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use fulltoss_admin::config::AdminConfig;
use fulltoss_admin::state::AppState;
use fulltoss_core::{OrderHistoryItem, OrderItem, PhoneNumber, Retailer, Ticket};

/// The only code the stub backend's `verifyOtp` accepts.
pub const VALID_OTP: &str = "123456";

/// Phone-number suffix that makes the stub decline to send a code.
pub const DECLINED_SUFFIX: &str = "0000";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateOtpBody {
    phone_number: String,
}

#[derive(Debug, Deserialize)]
struct VerifyOtpBody {
    #[allow(dead_code)]
    phone: String,
    otp: String,
}

/// Fixture retailers served by the stub backend.
///
/// Lakshmi Agencies matches the canonical aggregation scenario: one
/// history item, one order, tickets A:2 and B:2, total amount 100.
#[must_use]
pub fn fixture_retailers() -> Vec<Retailer> {
    let draw_date = Utc.with_ymd_and_hms(2025, 7, 5, 14, 0, 0).single().expect("valid date");
    let order_date = Utc.with_ymd_and_hms(2025, 7, 1, 10, 30, 0).single().expect("valid date");

    vec![
        Retailer {
            phone: PhoneNumber::new("+91", "9876543210"),
            name: "Lakshmi Agencies".to_string(),
            email: "lakshmi@example.com".to_string(),
            address: "12 MG Road, Bengaluru".to_string(),
            rating: "4.5".to_string(),
            about: Some("Corner shop since 1998".to_string()),
            order_history: vec![OrderHistoryItem {
                order_date,
                total_amount: Decimal::from(100),
                orders: vec![OrderItem {
                    id: "ord-1".to_string(),
                    retailer_id: "+919876543210".to_string(),
                    lottery_name: "Dear Morning".to_string(),
                    draw_date,
                    kind: Some("weekly".to_string()),
                    price: Decimal::from(100),
                    tickets: vec![
                        Ticket {
                            ticket: "A".to_string(),
                            count: 2,
                        },
                        Ticket {
                            ticket: "B".to_string(),
                            count: 2,
                        },
                    ],
                }],
            }],
        },
        Retailer {
            phone: PhoneNumber::new("+91", "9000011111"),
            name: "Ganesh Lottery Centre".to_string(),
            email: "ganesh@example.com".to_string(),
            address: "4 Beach Road, Chennai".to_string(),
            rating: "3.9".to_string(),
            about: None,
            order_history: vec![],
        },
    ]
}

/// Build the stub backend router.
fn stub_backend_router() -> Router {
    Router::new()
        .route(
            "/generateOtp",
            post(|Json(body): Json<GenerateOtpBody>| async move {
                let success = !body.phone_number.ends_with(DECLINED_SUFFIX);
                Json(json!({ "success": success }))
            }),
        )
        .route(
            "/verifyOtp",
            post(|Json(body): Json<VerifyOtpBody>| async move {
                Json(json!({ "success": body.otp == VALID_OTP }))
            }),
        )
        .route(
            "/retailersData",
            get(|| async { Json(json!({ "data": fixture_retailers() })) }),
        )
}

/// Serve a router on an ephemeral localhost port; returns its base URL.
async fn spawn(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    format!("http://{addr}/").parse().expect("valid base URL")
}

/// Start the stub FullToss backend; returns its base URL.
pub async fn spawn_stub_backend() -> Url {
    spawn(stub_backend_router()).await
}

/// Stub backend that counts `generateOtp` hits.
///
/// Returns the base URL and the shared hit counter, for tests that assert
/// on how often the portal actually calls upstream.
pub async fn spawn_counting_stub_backend() -> (Url, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let router = Router::new().route(
        "/generateOtp",
        post(move |Json(body): Json<GenerateOtpBody>| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let success = !body.phone_number.ends_with(DECLINED_SUFFIX);
                Json(json!({ "success": success }))
            }
        }),
    );

    (spawn(router).await, hits)
}

/// Reserve a localhost port with nothing listening on it.
///
/// Used to simulate an unreachable backend (connection refused).
pub async fn unreachable_backend_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    format!("http://{addr}/").parse().expect("valid base URL")
}

/// Portal configuration pointing at the given backend.
#[must_use]
pub fn portal_config(backend_url: Url) -> AdminConfig {
    AdminConfig {
        backend_url,
        host: "127.0.0.1".parse().expect("valid IP"),
        port: 0,
        base_url: "http://localhost:3001".to_string(),
        session_secret: SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
        tls: None,
    }
}

/// Start the portal app pointed at `backend_url`; returns its base URL.
pub async fn spawn_portal(backend_url: Url) -> Url {
    let state = AppState::new(portal_config(backend_url));
    spawn(fulltoss_admin::app(state)).await
}

/// A reqwest client that keeps session cookies, like a browser.
#[must_use]
pub fn browser_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
