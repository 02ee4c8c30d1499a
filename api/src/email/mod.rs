// Outbound email through the Resend HTTP API, or log-only delivery when no
// API key is configured

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Email provider returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A message ready to hand to the provider
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailOutcome {
    /// Accepted by the provider, with its message id when returned
    Sent { id: Option<String> },
    /// No provider configured; the message was only logged
    Logged,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    id: Option<String>,
}

/// Sends mail through Resend
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    from: String,
}

impl Mailer {
    pub fn new(config: &ApiConfig) -> Result<Self, EmailError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| EmailError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.resend_api_key.clone(),
            api_url: config.resend_api_url.clone(),
            from: config.email_from.clone(),
        })
    }

    pub fn is_mock(&self) -> bool {
        self.api_key.is_none()
    }

    pub fn compose(&self, to: &str, subject: &str, html: String) -> OutgoingEmail {
        OutgoingEmail {
            from: self.from.clone(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            html,
        }
    }

    pub async fn send(&self, email: &OutgoingEmail) -> Result<EmailOutcome, EmailError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!(
                "Email delivery not configured; would send \"{}\" to {}",
                email.subject,
                email.to.join(", ")
            );
            tracing::debug!("Email body: {}", email.html);
            return Ok(EmailOutcome::Logged);
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Email provider returned {}: {}", status, body);
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let id = response
            .json::<ProviderResponse>()
            .await
            .ok()
            .and_then(|r| r.id);
        tracing::info!("Email \"{}\" sent to {}", email.subject, email.to.join(", "));
        Ok(EmailOutcome::Sent { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_without_api_key_mail_is_logged() {
        let mailer = Mailer::new(&ApiConfig::for_database("sqlite::memory:")).unwrap();
        assert!(mailer.is_mock());

        let email = mailer.compose("priya@example.com", "Your assets", "<p>hi</p>".into());
        assert_eq!(email.to, vec!["priya@example.com"]);
        assert_eq!(mailer.send(&email).await.unwrap(), EmailOutcome::Logged);
    }

    #[test]
    fn test_payload_shape() {
        let mailer = Mailer::new(&ApiConfig::for_database("sqlite::memory:")).unwrap();
        let email = mailer.compose("a@b.co", "Subject", "<b>x</b>".into());
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["to"][0], "a@b.co");
        assert_eq!(json["from"], "Asset Compass <onboarding@resend.dev>");
        assert_eq!(json["html"], "<b>x</b>");
    }
}
