use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::backend::{BackendApi, BackendConfig};
use crate::models::{StudyDraft, StudyPayload};
use crate::semester;
use crate::validate::{FieldErrors, validate_study};

const MSG_CHECK_INPUT: &str = "입력값을 확인해주세요.";
const MSG_SENT: &str = "서버 전송 완료(시뮬레이션).";
const MSG_ATTEMPTED: &str = "전송 시도 완료(시뮬레이션).";

/// Uniform study-submission result. Validation failures come back as data,
/// never as an error, so the caller can re-render the form.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionState {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<StudyPayload>,
}

impl SubmissionState {
    fn rejected(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: MSG_CHECK_INPUT.to_string(),
            errors: Some(errors),
            payload: None,
        }
    }
}

pub struct SubmissionService {
    backend: Arc<dyn BackendApi>,
    config: BackendConfig,
}

impl SubmissionService {
    pub fn new(backend: Arc<dyn BackendApi>, config: BackendConfig) -> Self {
        Self { backend, config }
    }

    /// Validate, build the payload, dispatch. Validation runs to completion
    /// before any network activity; a draft that fails it never leaves the
    /// process.
    ///
    /// The dispatch target is a simulated backend, so a failed POST still
    /// reports success with the "attempted" message. Revisit this policy
    /// when the real study endpoint lands.
    pub async fn submit(&self, draft: &StudyDraft) -> SubmissionState {
        let study = match validate_study(draft) {
            Ok(study) => study,
            Err(errors) => return SubmissionState::rejected(errors),
        };

        let payload = StudyPayload::build(
            &study,
            &self.config.leader_id,
            &self.config.image_url,
            semester::current_semester(),
        );

        let sent = match self.backend.create_study(&payload).await {
            Ok(()) => true,
            Err(err) => {
                warn!("study dispatch failed: {err}");
                false
            }
        };

        info!(sent, title = %payload.title, "study submission finished");
        SubmissionState {
            success: true,
            message: if sent { MSG_SENT } else { MSG_ATTEMPTED }.to_string(),
            errors: None,
            payload: Some(payload),
        }
    }
}
