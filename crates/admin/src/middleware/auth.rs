//! Authentication extractors for the admin portal.
//!
//! The dashboard is intentionally reachable without logging in (see
//! DESIGN.md); no route guard sits between the login view and the data
//! view. Handlers that want to show who is logged in use
//! [`OptionalOperatorAuth`].

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{CurrentOperator, session_keys};

/// Extractor that optionally gets the current operator.
///
/// Never rejects the request; yields `None` when nobody is logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalOperatorAuth(operator): OptionalOperatorAuth,
/// ) -> impl IntoResponse {
///     match operator {
///         Some(op) => format!("Logged in as {}", op.phone),
///         None => "Not logged in".to_string(),
///     }
/// }
/// ```
pub struct OptionalOperatorAuth(pub Option<CurrentOperator>);

impl<S> FromRequestParts<S> for OptionalOperatorAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let operator = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentOperator>(session_keys::CURRENT_OPERATOR)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(operator))
    }
}

/// Set the current operator in the session (the single login write path).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_operator(
    session: &Session,
    operator: &CurrentOperator,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_OPERATOR, operator)
        .await
}

/// Clear the current operator from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_operator(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentOperator>(session_keys::CURRENT_OPERATOR)
        .await?;
    Ok(())
}
