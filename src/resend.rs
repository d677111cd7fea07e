//! Outbound HTTP client for the Resend API.
//! Covers the two operations this service needs: registering a contact to
//! the waitlist audience and sending a transactional email.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::web::types::ValidEmail;

/// Outcome of a contact registration.
/// Resend reports duplicates with a 409, which callers treat as a success
/// with a flag rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug)]
pub struct ResendClient {
    http_client: Client,
    url: reqwest::Url,
    sender: String,
    api_key: SecretString,
    audience_id: String,
}

impl ResendClient {
    pub fn new<S: AsRef<str>>(
        url: S,
        sender: String,
        api_key: SecretString,
        audience_id: String,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let url =
            reqwest::Url::parse(url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(ResendClient {
            http_client,
            url,
            sender,
            api_key,
            audience_id,
        })
    }

    /// Registers `email` to the configured audience.
    ///
    /// A 409 response is the canonical duplicate signal; as a fallback a
    /// non-success body mentioning "already" is treated the same way, since
    /// the provider reported duplicates like that in the past.
    pub async fn add_contact(&self, email: &ValidEmail) -> Result<ContactOutcome> {
        let url = self
            .url
            .join(&format!("audiences/{}/contacts", self.audience_id))
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let resp = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&ContactContent {
                email: email.as_ref(),
                unsubscribed: false,
            })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(ContactOutcome::Created);
        }

        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::CONFLICT || body.to_lowercase().contains("already") {
            return Ok(ContactOutcome::AlreadyExists);
        }

        Err(Error::ContactRejected { status, body })
    }

    /// Sends a single HTML email from the configured sender address.
    pub async fn send_email(&self, recipient: &ValidEmail, subject: &str, html: &str) -> Result<()> {
        let url = self
            .url
            .join("emails")
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let email_content = EmailContent {
            from: &self.sender,
            to: [recipient.as_ref()],
            subject,
            html,
        };

        let _resp = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&email_content)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Serialize)]
struct ContactContent<'a> {
    email: &'a str,
    unsubscribed: bool,
}

#[derive(Serialize)]
struct EmailContent<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("contact registration rejected with status {status}: {body}")]
    ContactRejected { status: StatusCode, body: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
