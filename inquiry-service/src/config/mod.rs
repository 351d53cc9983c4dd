use serde::Deserialize;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct InquiryConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// The single trusted frontend origin allowed by CORS.
    pub allowed_origin: String,
}

impl InquiryConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(InquiryConfig {
            common,
            service_name: get_env("SERVICE_NAME", Some("inquiry-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            security: SecurityConfig {
                allowed_origin: get_env(
                    "ALLOWED_ORIGIN",
                    Some("http://localhost:3000"),
                    is_prod,
                )?,
            },
        })
    }
}
