use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::{
    resend::{self, ContactOutcome},
    web::{
        types::{DataParsingError, ValidEmail},
        WebResult,
    },
    AppState,
};

/// Subject line of the confirmation email.
const CONFIRMATION_SUBJECT: &str = "Tu es sur la liste Flexo 🎉";

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("request body is not valid json")]
    BodyNotJson,
    #[error("http method not allowed on this route")]
    MethodNotAllowed,
    #[error("resend provider credentials are not configured")]
    ProviderConfigMissing,

    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),

    #[error("contact registration failed: {0}")]
    Registry(#[source] resend::Error),
}

// ###################################
// ->   API
// ###################################
#[derive(Debug, Serialize)]
pub struct WaitlistResponse {
    pub success: bool,
    #[serde(rename = "alreadyExists")]
    pub already_exists: bool,
}

/// Registers a signup to the waitlist audience, then sends the confirmation
/// email. The email send is best-effort: once the contact is registered a
/// failure to confirm must not fail the whole request.
#[tracing::instrument(name = "Registering a waitlist signup", skip_all)]
pub async fn waitlist_signup(
    State(app_state): State<AppState>,
    body: Bytes,
) -> WebResult<Json<WaitlistResponse>> {
    let resend = app_state
        .resend
        .as_ref()
        .ok_or(WaitlistError::ProviderConfigMissing)?;

    let body: Value =
        serde_json::from_slice(&body).map_err(|_| WaitlistError::BodyNotJson)?;
    let email = body
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let email = ValidEmail::parse(email).map_err(WaitlistError::DataParsing)?;

    let already_exists = match resend
        .add_contact(&email)
        .await
        .map_err(WaitlistError::Registry)?
    {
        ContactOutcome::AlreadyExists => {
            info!("Contact was already registered to the audience.");
            true
        }
        ContactOutcome::Created => false,
    };

    match app_state.templ_mgr.render_confirmation_email() {
        Ok(html) => {
            if let Err(e) = resend.send_email(&email, CONFIRMATION_SUBJECT, &html).await {
                error!(error = %e, "Failed to send the confirmation email");
            } else {
                info!("Confirmation email sent.");
            }
        }
        Err(e) => error!(error = %e, "Failed to render the confirmation email"),
    }

    Ok(Json(WaitlistResponse {
        success: true,
        already_exists,
    }))
}

/// Empty reply to the browser cross-origin pre-flight check.
/// The CORS headers themselves are attached by the response mapper.
pub async fn waitlist_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for every method other than POST and OPTIONS.
pub async fn method_not_allowed() -> WebResult<()> {
    Err(WaitlistError::MethodNotAllowed.into())
}
