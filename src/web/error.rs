use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;

use crate::resend;

use super::routes::WaitlistError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("waitlist error: {0}")]
    Waitlist(#[from] WaitlistError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Waitlist(WaitlistError::BodyNotJson) => (StatusCode::BAD_REQUEST, InvalidJsonBody),
            Error::Waitlist(WaitlistError::DataParsing(_)) => (StatusCode::BAD_REQUEST, InvalidEmail),
            Error::Waitlist(WaitlistError::MethodNotAllowed) => {
                (StatusCode::METHOD_NOT_ALLOWED, MethodNotAllowed)
            }
            Error::Waitlist(WaitlistError::ProviderConfigMissing) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MissingServerConfig)
            }
            Error::Waitlist(WaitlistError::Registry(resend::Error::Reqwest(_))) => {
                (StatusCode::BAD_GATEWAY, RegistryUnreachable)
            }
            Error::Waitlist(WaitlistError::Registry(_)) => {
                (StatusCode::BAD_GATEWAY, RegistrationFailed)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error messages shown to the client, kept in French to match the
/// product surface the waitlist form belongs to.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Body JSON invalide")]
    InvalidJsonBody,
    #[display("Adresse email invalide")]
    InvalidEmail,
    #[display("Méthode non autorisée")]
    MethodNotAllowed,
    #[display("Configuration serveur manquante")]
    MissingServerConfig,
    #[display("Erreur lors de l'inscription")]
    RegistrationFailed,
    #[display("Erreur réseau vers Resend")]
    RegistryUnreachable,
}
