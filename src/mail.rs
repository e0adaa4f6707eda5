use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, MailConfig};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("mail service is not configured")]
    NotConfigured(#[from] ConfigError),
    #[error("could not reach the mail service: {0}")]
    Request(String),
    #[error("mail service answered with status {0}")]
    Status(u16),
}

/// Template variables sent with every contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub phone: String,
    pub message: String,
}

/// Anything that can deliver a contact message.
pub trait MailTransport {
    fn send(&self, params: TemplateParams) -> impl Future<Output = Result<(), MailError>>;
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends through the EmailJS REST API from the browser.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    config: Result<MailConfig, ConfigError>,
}

impl EmailJsTransport {
    pub fn new(config: Result<MailConfig, ConfigError>) -> Self {
        Self { config }
    }

    pub fn from_build_env() -> Self {
        let config = MailConfig::from_build_env();
        if let Err(e) = &config {
            log::warn!("contact form disabled: {e}");
        }
        Self::new(config)
    }

    fn request<'a>(
        config: &'a MailConfig,
        params: &'a TemplateParams,
    ) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        }
    }
}

impl MailTransport for EmailJsTransport {
    async fn send(&self, params: TemplateParams) -> Result<(), MailError> {
        let config = self.config.clone()?;
        let body = Self::request(&config, &params);
        post_json(&body).await
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(body: &EmailJsRequest<'_>) -> Result<(), MailError> {
    use gloo_net::http::Request;

    let response = Request::post(EMAILJS_SEND_URL)
        .json(body)
        .map_err(|e| MailError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| MailError::Request(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(MailError::Status(response.status()))
    }
}

#[cfg(not(feature = "hydrate"))]
async fn post_json(_body: &EmailJsRequest<'_>) -> Result<(), MailError> {
    Err(MailError::Request(
        "mail can only be sent from the browser".to_string(),
    ))
}
