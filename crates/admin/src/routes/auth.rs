//! Authentication route handlers: the SMS OTP login flow.
//!
//! Post/redirect/get throughout: both OTP posts stash a flash message (and
//! on success a cooldown or the logged-in operator) in the session, then
//! redirect back to the login page. Backend failures never bubble up as
//! error responses here - they degrade to the flash message and the form
//! stays usable.

use askama::Template;
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use fulltoss_core::PhoneNumber;

use crate::config::COUNTRY_CODES;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{OptionalOperatorAuth, clear_current_operator, set_current_operator};
use crate::models::{CurrentOperator, PendingLogin, session_keys};
use crate::services::otp::{Cooldown, SendOutcome, VerifyOutcome};
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginPageTemplate {
    /// Country-code prefixes for the select box.
    country_codes: Vec<String>,
    /// Currently selected prefix.
    selected_country: String,
    /// National number carried over from the request-code step.
    phone_number: String,
    /// One-shot flash message, if any.
    message: Option<String>,
    /// Seconds until resend is allowed again (0 = enabled).
    cooldown_remaining: i64,
    /// Phone of the logged-in operator, if any.
    operator_phone: Option<String>,
}

/// Form body for `POST /auth/otp/request`.
#[derive(Debug, Deserialize)]
pub struct RequestCodeForm {
    country_code: String,
    phone_number: String,
}

/// Form body for `POST /auth/otp/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyCodeForm {
    country_code: String,
    phone_number: String,
    code: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_page))
        .route("/auth/otp/request", post(request_code))
        .route("/auth/otp/verify", post(verify_code))
        .route("/auth/logout", post(logout))
}

/// Render the login page.
///
/// GET /auth/login
#[instrument(skip_all)]
async fn login_page(
    OptionalOperatorAuth(operator): OptionalOperatorAuth,
    session: Session,
) -> Result<Html<String>, AppError> {
    // Flash messages are one-shot: read and clear.
    let message: Option<String> = session.remove(session_keys::LOGIN_FLASH).await?;

    // An elapsed cooldown is dropped from the session; the button re-enables.
    let now = Utc::now();
    let cooldown: Option<Cooldown> = session.get(session_keys::OTP_COOLDOWN).await?;
    let cooldown_remaining = match cooldown {
        Some(cooldown) if !cooldown.is_elapsed(now) => cooldown.remaining_secs(now),
        Some(_) => {
            session
                .remove::<Cooldown>(session_keys::OTP_COOLDOWN)
                .await?;
            0
        }
        None => 0,
    };

    let pending: Option<PendingLogin> = session.get(session_keys::PENDING_LOGIN).await?;
    let (selected_country, phone_number) = pending
        .map(|p| (p.country_code, p.phone_number))
        .unwrap_or_else(|| {
            let default_code = COUNTRY_CODES.first().copied().unwrap_or("+1");
            (default_code.to_string(), String::new())
        });

    let template = LoginPageTemplate {
        country_codes: COUNTRY_CODES.iter().map(ToString::to_string).collect(),
        selected_country,
        phone_number,
        message,
        cooldown_remaining,
        operator_phone: operator.map(|op| op.phone.to_string()),
    };

    Ok(Html(template.render()?))
}

/// Ask the backend to text a verification code.
///
/// POST /auth/otp/request
#[instrument(skip_all)]
async fn request_code(
    State(state): State<AppState>,
    session: Session,
    axum::extract::Form(form): axum::extract::Form<RequestCodeForm>,
) -> Result<Redirect, AppError> {
    let now = Utc::now();

    // While a cooldown is pending the portal refuses to re-send. The
    // backend enforces its own rate limits regardless.
    let cooldown: Option<Cooldown> = session.get(session_keys::OTP_COOLDOWN).await?;
    if let Some(cooldown) = cooldown
        && !cooldown.is_elapsed(now)
    {
        return Ok(Redirect::to("/auth/login"));
    }

    // Keep the typed number across the redirect.
    let pending = PendingLogin {
        country_code: form.country_code.clone(),
        phone_number: form.phone_number.clone(),
    };
    session
        .insert(session_keys::PENDING_LOGIN, &pending)
        .await?;

    let phone = PhoneNumber::new(&form.country_code, &form.phone_number);
    let result = state.backend().generate_otp(&phone).await;
    let outcome = SendOutcome::from_result(result, now);

    match &outcome {
        SendOutcome::Sent(cooldown) => {
            session
                .insert(session_keys::OTP_COOLDOWN, cooldown)
                .await?;
        }
        SendOutcome::Declined => {}
        SendOutcome::Failed(e) => {
            tracing::error!(error = %e, "Failed to request verification code");
        }
    }

    session
        .insert(session_keys::LOGIN_FLASH, outcome.message())
        .await?;

    Ok(Redirect::to("/auth/login"))
}

/// Submit a verification code.
///
/// POST /auth/otp/verify
#[instrument(skip_all)]
async fn verify_code(
    State(state): State<AppState>,
    session: Session,
    axum::extract::Form(form): axum::extract::Form<VerifyCodeForm>,
) -> Result<Redirect, AppError> {
    let phone = PhoneNumber::new(&form.country_code, &form.phone_number);
    let result = state.backend().verify_otp(&phone, &form.code).await;
    let outcome = VerifyOutcome::from_result(result);

    match &outcome {
        VerifyOutcome::Verified => {
            // The single login write path: operator phone + implied flag.
            let operator = CurrentOperator { phone };
            set_current_operator(&session, &operator).await?;

            session
                .remove::<PendingLogin>(session_keys::PENDING_LOGIN)
                .await?;
            session
                .remove::<Cooldown>(session_keys::OTP_COOLDOWN)
                .await?;
        }
        VerifyOutcome::Declined => {}
        VerifyOutcome::Failed(e) => {
            tracing::error!(error = %e, "Failed to verify code");
        }
    }

    session
        .insert(session_keys::LOGIN_FLASH, outcome.message())
        .await?;

    Ok(Redirect::to("/auth/login"))
}

/// Logout and clear the operator from the session.
///
/// POST /auth/logout
#[instrument(skip_all)]
async fn logout(session: Session) -> impl IntoResponse {
    let _ = clear_current_operator(&session).await;

    Redirect::to("/auth/login")
}
