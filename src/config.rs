use chrono::{DateTime, Datelike};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
}

/// Credentials for the transactional mail provider, baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailConfig {
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID", service_id)?,
            template_id: required("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: required("EMAILJS_PUBLIC_KEY", public_key)?,
        })
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
