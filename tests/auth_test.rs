use std::sync::Arc;

use async_trait::async_trait;

use cams_gateway::backend::{BackendApi, BackendConfig, BackendHttpClient, dto::AuthAck};
use cams_gateway::error::AppError;
use cams_gateway::models::{LoginDraft, LoginPayload, SignupDraft, SignupPayload, StudyPayload};
use cams_gateway::services::AuthService;
use cams_gateway::validate::FieldErrors;

/// Rejects every auth request the way the real backend does: a status, a
/// message and (for signup) per-field errors.
struct RejectingBackend;

#[async_trait]
impl BackendApi for RejectingBackend {
    async fn create_study(&self, _payload: &StudyPayload) -> Result<(), AppError> {
        Ok(())
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<AuthAck, AppError> {
        let mut errors = FieldErrors::new();
        errors.insert(
            "student_id".to_string(),
            "이미 등록된 학번입니다".to_string(),
        );
        Err(AppError::RemoteRejection {
            status: 409,
            message: Some("이미 가입된 회원입니다.".to_string()),
            errors,
        })
    }

    async fn signin(&self, _payload: &LoginPayload) -> Result<AuthAck, AppError> {
        Err(AppError::RemoteRejection {
            status: 401,
            message: None,
            errors: FieldErrors::new(),
        })
    }
}

/// Accepts every auth request and hands back a token.
struct AckBackend;

#[async_trait]
impl BackendApi for AckBackend {
    async fn create_study(&self, _payload: &StudyPayload) -> Result<(), AppError> {
        Ok(())
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<AuthAck, AppError> {
        Ok(AuthAck {
            message: Some("환영합니다!".to_string()),
            access_token: None,
        })
    }

    async fn signin(&self, _payload: &LoginPayload) -> Result<AuthAck, AppError> {
        Ok(AuthAck {
            message: None,
            access_token: Some("token-abc".to_string()),
        })
    }
}

fn signup_draft() -> SignupDraft {
    SignupDraft {
        name: "김수연".to_string(),
        gender: "female".to_string(),
        birthdate: "2002-03-14".to_string(),
        phone: "010-1234-5678".to_string(),
        major: "컴퓨터공학과".to_string(),
        student_id: "2021123456".to_string(),
        status: "enrolled".to_string(),
        campus: "seoul".to_string(),
        reason: "같이 공부하고 싶어요".to_string(),
        experience: "개인 프로젝트 경험".to_string(),
    }
}

fn login_draft() -> LoginDraft {
    LoginDraft {
        student_id: "2021123456".to_string(),
        password: "hunter22".to_string(),
    }
}

#[tokio::test]
async fn signup_validation_failure_never_reaches_the_backend() {
    let service = AuthService::new(Arc::new(RejectingBackend));

    let state = service.signup(&SignupDraft::default()).await;

    assert!(!state.success);
    assert_eq!(state.message, "입력한 정보를 확인해주세요.");
    let errors = state.errors.expect("field errors");
    assert_eq!(errors.get("name").map(String::as_str), Some("이름은 필수입니다"));
    assert_eq!(
        errors.get("student_id").map(String::as_str),
        Some("학번은 숫자 10자리여야 합니다")
    );
}

#[tokio::test]
async fn signup_rejection_propagates_the_server_message_and_fields() {
    let service = AuthService::new(Arc::new(RejectingBackend));

    let state = service.signup(&signup_draft()).await;

    assert!(!state.success);
    assert_eq!(state.message, "이미 가입된 회원입니다.");
    let errors = state.errors.expect("server field errors");
    assert_eq!(
        errors.get("student_id").map(String::as_str),
        Some("이미 등록된 학번입니다")
    );
}

#[tokio::test]
async fn signin_rejection_without_a_body_uses_the_default_message() {
    let service = AuthService::new(Arc::new(RejectingBackend));

    let state = service.signin(&login_draft()).await;

    assert!(!state.success);
    assert_eq!(state.message, "로그인에 실패했습니다.");
    assert!(state.errors.is_none());
}

#[tokio::test]
async fn successful_signin_passes_the_token_through() {
    let service = AuthService::new(Arc::new(AckBackend));

    let state = service.signin(&login_draft()).await;

    assert!(state.success);
    assert_eq!(state.message, "로그인 되었습니다.");
    assert_eq!(state.access_token.as_deref(), Some("token-abc"));

    let state = service.signup(&signup_draft()).await;
    assert!(state.success);
    assert_eq!(state.message, "환영합니다!");
}

#[tokio::test]
async fn missing_base_url_is_a_recoverable_configuration_error() {
    let config = BackendConfig {
        api_base_url: None,
        study_endpoint: "http://localhost/simulated".to_string(),
        leader_id: String::new(),
        image_url: String::new(),
    };
    let client = BackendHttpClient::new(config).expect("client");
    let service = AuthService::new(Arc::new(client));

    let state = service.signup(&signup_draft()).await;
    assert!(!state.success);
    assert_eq!(state.message, "서버 설정 오류: API 주소가 설정되지 않았습니다.");
    assert!(state.errors.is_none());

    let state = service.signin(&login_draft()).await;
    assert!(!state.success);
    assert_eq!(state.message, "서버 설정 오류: API 주소 미설정");
}
