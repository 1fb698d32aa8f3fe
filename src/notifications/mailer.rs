//! Outbound email delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send the HTML
//! notification emails behind the booking and inquiry dispatch endpoints.
//! Configuration is loaded from environment variables; if `SMTP_HOST` is not
//! set, [`EmailSettings::from_env`] returns `None`, no mailer is constructed,
//! and the dispatch endpoints answer 503.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@atrium.events";

/// Configuration for the SMTP delivery service and recipient resolution.
///
/// The operator address and the customer-send flag are injected here rather
/// than hardcoded in the dispatch handlers, so sandboxed deployments can turn
/// the customer copy off without rerouting it.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Address the operations team reads booking and inquiry mail on.
    pub operator_email: String,
    /// Whether the customer-facing copy of a booking confirmation is sent.
    pub customer_send_enabled: bool,
}

impl EmailSettings {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped. When `SMTP_HOST`
    /// is present, `OPERATOR_EMAIL` must be too: a mail setup without a
    /// recipient refuses to start rather than serving half-configured.
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            operator_email: std::env::var("OPERATOR_EMAIL")
                .expect("OPERATOR_EMAIL must be set when SMTP_HOST is configured"),
            customer_send_enabled: std::env::var("CUSTOMER_SEND_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        })
    }
}

/// Sends notification emails via SMTP. Constructed once at startup and
/// shared through `AppState` for the life of the process.
pub struct Mailer {
    settings: EmailSettings,
}

impl Mailer {
    pub fn new(settings: EmailSettings) -> Self {
        Self { settings }
    }

    pub fn operator_email(&self) -> &str {
        &self.settings.operator_email
    }

    pub fn customer_send_enabled(&self) -> bool {
        self.settings.customer_send_enabled
    }

    /// Send a single HTML email to the given address.
    pub async fn send_html(
        &self,
        to_email: &str,
        subject: &str,
        html_body: String,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(self.settings.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.smtp_host)?
                .port(self.settings.smtp_port);

        if let (Some(user), Some(pass)) = (&self.settings.smtp_user, &self.settings.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, subject, "Notification email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        // Ensure SMTP_HOST is not set in the test environment.
        unsafe { std::env::remove_var("SMTP_HOST") };
        assert!(EmailSettings::from_env().is_none());
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn email_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
