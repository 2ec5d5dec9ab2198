use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::backend::BackendApi;
use crate::error::AppError;
use crate::models::{LoginDraft, SignupDraft};
use crate::validate::{FieldErrors, validate_login, validate_signup};

const MSG_CHECK_INPUT: &str = "입력한 정보를 확인해주세요.";
const MSG_SIGNUP_CONFIG: &str = "서버 설정 오류: API 주소가 설정되지 않았습니다.";
const MSG_LOGIN_CONFIG: &str = "서버 설정 오류: API 주소 미설정";
const MSG_SIGNUP_FAILED: &str = "회원가입 요청에 실패했습니다.";
const MSG_LOGIN_FAILED: &str = "로그인에 실패했습니다.";
const MSG_SIGNUP_ACCEPTED: &str = "회원가입 신청이 접수되었습니다.";
const MSG_LOGIN_OK: &str = "로그인 되었습니다.";
const MSG_UNKNOWN: &str = "알 수 없는 오류가 발생했습니다.";

/// Uniform auth-flow result. Unlike the study path, backend failures here
/// are real failures and propagate to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct AuthState {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl AuthState {
    fn failed(message: impl Into<String>, errors: Option<FieldErrors>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
            access_token: None,
        }
    }
}

pub struct AuthService {
    backend: Arc<dyn BackendApi>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    pub async fn signup(&self, draft: &SignupDraft) -> AuthState {
        let payload = match validate_signup(draft) {
            Ok(payload) => payload,
            Err(errors) => return AuthState::failed(MSG_CHECK_INPUT, Some(errors)),
        };

        match self.backend.signup(&payload).await {
            Ok(ack) => AuthState {
                success: true,
                message: ack.message.unwrap_or_else(|| MSG_SIGNUP_ACCEPTED.to_string()),
                errors: None,
                access_token: ack.access_token,
            },
            Err(err) => self.failure(err, MSG_SIGNUP_CONFIG, MSG_SIGNUP_FAILED),
        }
    }

    pub async fn signin(&self, draft: &LoginDraft) -> AuthState {
        let payload = match validate_login(draft) {
            Ok(payload) => payload,
            Err(errors) => return AuthState::failed(MSG_CHECK_INPUT, Some(errors)),
        };

        match self.backend.signin(&payload).await {
            Ok(ack) => AuthState {
                success: true,
                message: ack.message.unwrap_or_else(|| MSG_LOGIN_OK.to_string()),
                errors: None,
                access_token: ack.access_token,
            },
            Err(err) => self.failure(err, MSG_LOGIN_CONFIG, MSG_LOGIN_FAILED),
        }
    }

    fn failure(&self, err: AppError, config_msg: &str, default_msg: &str) -> AuthState {
        match err {
            AppError::Config(detail) => {
                error!("auth misconfiguration: {detail}");
                AuthState::failed(config_msg, None)
            }
            AppError::RemoteRejection { message, errors, .. } => AuthState::failed(
                message.unwrap_or_else(|| default_msg.to_string()),
                (!errors.is_empty()).then_some(errors),
            ),
            err => {
                error!("auth request failed: {err}");
                AuthState::failed(MSG_UNKNOWN, None)
            }
        }
    }
}
