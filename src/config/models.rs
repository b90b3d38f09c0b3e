use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "User id cannot be empty"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,

    /// Overrides the default API endpoint.
    #[serde(default)]
    #[validate(url(message = "API URL must be a valid URL"))]
    pub url: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Proxy must be a valid URL"))]
    pub proxy: Option<String>,
}
