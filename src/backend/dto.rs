use serde::Deserialize;

use crate::validate::FieldErrors;

/// Error body the backend API returns on a rejected request. Both fields are
/// best-effort; an unparseable body falls back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: FieldErrors,
}

/// Success body of the auth endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
}
