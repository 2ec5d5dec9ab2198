use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw signup form fields. Validation messages (and the field paths the
/// client renders them under) match the form field names one to one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupDraft {
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::member_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::gender_token"))]
    pub gender: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::birthdate"))]
    pub birthdate: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::phone"))]
    pub phone: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::major"))]
    pub major: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::student_id"))]
    pub student_id: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::status_token"))]
    pub status: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::member_campus_token"))]
    pub campus: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::join_reason"))]
    pub reason: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::dev_experience"))]
    pub experience: String,
}

/// Wire-ready signup payload. Enum fields travel as upper-snake strings
/// (`MALE`, `ON_LEAVE`, `CHEON_AN`), the shape the backend auth API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub student_id: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    /// Bare digits, no hyphens.
    pub phone_number: String,
    pub gender: String,
    pub department: String,
    pub enrollment_status: String,
    pub campus: String,
    pub join_reason: String,
    pub dev_experience: String,
    pub is_fee_paid: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginDraft {
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::student_id"))]
    pub student_id: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::password"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub student_id: String,
    pub password: String,
}
