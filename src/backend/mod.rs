pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{LoginPayload, SignupPayload, StudyPayload};
use crate::validate::FieldErrors;

/// Echo endpoint used while the real study endpoint is not wired up. A
/// production deployment must override this via SIMULATED_ENDPOINT or,
/// better, replace the simulated dispatch path altogether.
pub const DEFAULT_STUDY_ENDPOINT: &str = "https://httpbin.org/post";

#[derive(Clone, Debug)]
pub struct BackendConfig {
    /// Base URL of the club backend API (trailing slashes trimmed). Auth
    /// flows surface a recoverable configuration error when unset.
    pub api_base_url: Option<String>,
    /// Where study submissions go until the real endpoint exists.
    pub study_endpoint: String,
    /// Placeholder until the session wiring fills the leader in.
    pub leader_id: String,
    /// Placeholder until the upload pipeline produces real URLs.
    pub image_url: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("BACKEND_API_URL")
            .ok()
            .map(|v| v.trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let study_endpoint = env::var("SIMULATED_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STUDY_ENDPOINT.to_string());

        Self {
            api_base_url,
            study_endpoint,
            leader_id: env::var("MOCK_LEADER_ID").unwrap_or_default(),
            image_url: env::var("MOCK_IMAGE_URL").unwrap_or_default(),
        }
    }

    fn auth_endpoint(&self, path: &str) -> Result<String, AppError> {
        let base = self
            .api_base_url
            .as_deref()
            .ok_or_else(|| AppError::Config("BACKEND_API_URL is not set".to_string()))?;
        Ok(format!("{base}{path}"))
    }
}

#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn create_study(&self, payload: &StudyPayload) -> Result<(), AppError>;
    async fn signup(&self, payload: &SignupPayload) -> Result<dto::AuthAck, AppError>;
    async fn signin(&self, payload: &LoginPayload) -> Result<dto::AuthAck, AppError>;
}

pub struct BackendHttpClient {
    client: Client,
    config: BackendConfig,
}

impl BackendHttpClient {
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    async fn post_auth<T: Serialize + Sync>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<dto::AuthAck, AppError> {
        let endpoint = self.config.auth_endpoint(path)?;
        let dispatch_id = Uuid::new_v4();
        info!(%dispatch_id, endpoint, "auth request");

        let response = self.client.post(&endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            // 본문 파싱은 best-effort: 깨진 본문이면 기본 메시지로 처리
            let body: dto::ApiErrorBody = response.json().await.unwrap_or_default();
            warn!(%dispatch_id, status = status.as_u16(), "auth request rejected");
            return Err(AppError::RemoteRejection {
                status: status.as_u16(),
                message: body.message,
                errors: body.errors,
            });
        }

        info!(%dispatch_id, status = status.as_u16(), "auth request accepted");
        Ok(response.json().await.unwrap_or_default())
    }
}

#[async_trait]
impl BackendApi for BackendHttpClient {
    async fn create_study(&self, payload: &StudyPayload) -> Result<(), AppError> {
        let endpoint = &self.config.study_endpoint;
        let dispatch_id = Uuid::new_v4();
        info!(%dispatch_id, endpoint, "dispatching study payload");

        let response = self.client.post(endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RemoteRejection {
                status: status.as_u16(),
                message: (!body.is_empty()).then_some(body),
                errors: FieldErrors::new(),
            });
        }

        info!(%dispatch_id, "study payload accepted");
        Ok(())
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<dto::AuthAck, AppError> {
        self.post_auth("/auth/signup", payload).await
    }

    async fn signin(&self, payload: &LoginPayload) -> Result<dto::AuthAck, AppError> {
        self.post_auth("/auth/signin", payload).await
    }
}

/// No-network stand-in for tests and local development.
pub struct NoopBackend;

#[async_trait]
impl BackendApi for NoopBackend {
    async fn create_study(&self, _payload: &StudyPayload) -> Result<(), AppError> {
        Ok(())
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<dto::AuthAck, AppError> {
        Ok(dto::AuthAck::default())
    }

    async fn signin(&self, _payload: &LoginPayload) -> Result<dto::AuthAck, AppError> {
        Ok(dto::AuthAck::default())
    }
}
