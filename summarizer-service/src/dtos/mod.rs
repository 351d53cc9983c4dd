use crate::services::SummaryLength;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub length: SummaryLength,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EssayRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct EssayResponse {
    pub essay: String,
}
