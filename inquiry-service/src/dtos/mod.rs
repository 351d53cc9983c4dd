use crate::services::Category;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(length(min = 1, message = "No query provided"))]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub message: String,
    pub category: Category,
}
