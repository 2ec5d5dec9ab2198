use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Datelike, Local};

use cams_gateway::backend::{BackendApi, BackendConfig, dto::AuthAck};
use cams_gateway::error::AppError;
use cams_gateway::models::{
    Campus, LoginPayload, ScheduleDay, ScheduleRowDraft, SignupPayload, StudyDraft, StudyLevel,
    StudyPayload,
};
use cams_gateway::semester::season_for_month;
use cams_gateway::services::SubmissionService;

/// Captures dispatched payloads instead of touching the network.
#[derive(Default)]
struct RecordingBackend {
    studies: Mutex<Vec<StudyPayload>>,
}

#[async_trait]
impl BackendApi for RecordingBackend {
    async fn create_study(&self, payload: &StudyPayload) -> Result<(), AppError> {
        self.studies.lock().expect("lock").push(payload.clone());
        Ok(())
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<AuthAck, AppError> {
        Ok(AuthAck::default())
    }

    async fn signin(&self, _payload: &LoginPayload) -> Result<AuthAck, AppError> {
        Ok(AuthAck::default())
    }
}

/// Every dispatch fails, as if the simulated endpoint were unreachable.
struct FailingBackend;

#[async_trait]
impl BackendApi for FailingBackend {
    async fn create_study(&self, _payload: &StudyPayload) -> Result<(), AppError> {
        Err(AppError::Internal)
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<AuthAck, AppError> {
        Err(AppError::Internal)
    }

    async fn signin(&self, _payload: &LoginPayload) -> Result<AuthAck, AppError> {
        Err(AppError::Internal)
    }
}

fn config() -> BackendConfig {
    BackendConfig {
        api_base_url: None,
        study_endpoint: "http://localhost/simulated".to_string(),
        leader_id: "leader-123".to_string(),
        image_url: "https://img.example/placeholder.png".to_string(),
    }
}

fn draft() -> StudyDraft {
    StudyDraft {
        activity_name: "알고리즘".to_string(),
        activity_description: "매주 모여서 문제를 풉니다.".to_string(),
        level: "easy".to_string(),
        campus: "SEOUL".to_string(),
        max_member: "10".to_string(),
        duration_week: "8".to_string(),
        schedule: vec![ScheduleRowDraft {
            day_of_week: "mon".to_string(),
            activity_start_time: "19:00".to_string(),
            activity_end_time: "21:00".to_string(),
        }],
        activity_stack: vec![
            "React".to_string(),
            "React".to_string(),
            "Vue".to_string(),
        ],
        ..StudyDraft::default()
    }
}

#[tokio::test]
async fn valid_submission_dispatches_the_normalized_payload() {
    let backend = Arc::new(RecordingBackend::default());
    let service = SubmissionService::new(backend.clone(), config());

    let state = service.submit(&draft()).await;

    assert!(state.success);
    assert_eq!(state.message, "서버 전송 완료(시뮬레이션).");
    assert!(state.errors.is_none());

    let studies = backend.studies.lock().expect("lock");
    assert_eq!(studies.len(), 1);
    let payload = &studies[0];
    assert_eq!(payload.title, "알고리즘");
    assert_eq!(payload.level, StudyLevel::Beginner);
    assert_eq!(payload.campus, Campus::Seoul);
    assert_eq!(payload.leader_id, "leader-123");
    assert_eq!(payload.image_url, "https://img.example/placeholder.png");
    assert_eq!(payload.tags, vec!["React".to_string(), "Vue".to_string()]);
    assert_eq!(payload.schedule.len(), 1);
    assert_eq!(payload.schedule[0].day, ScheduleDay::Monday);
    assert_eq!(payload.schedule[0].start_time, "19:00");
    assert_eq!(payload.schedule[0].end_time, "21:00");
    assert_eq!(payload.semester.year, Local::now().year());
    assert_eq!(payload.semester.season, season_for_month(Local::now().month()));
}

#[tokio::test]
async fn validation_failure_returns_before_any_dispatch() {
    let backend = Arc::new(RecordingBackend::default());
    let service = SubmissionService::new(backend.clone(), config());

    let mut bad = draft();
    bad.schedule[0].activity_end_time = "18:00".to_string();
    let state = service.submit(&bad).await;

    assert!(!state.success);
    assert_eq!(state.message, "입력값을 확인해주세요.");
    let errors = state.errors.expect("field errors");
    assert_eq!(
        errors.get("schedule.0.activity_end_time").map(String::as_str),
        Some("종료 시간은 시작 시간보다 늦어야 합니다.")
    );
    assert!(state.payload.is_none());
    assert!(backend.studies.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn dispatch_failure_still_reports_an_attempted_submission() {
    let service = SubmissionService::new(Arc::new(FailingBackend), config());

    let state = service.submit(&draft()).await;

    assert!(state.success, "simulated backend failures are non-fatal");
    assert_eq!(state.message, "전송 시도 완료(시뮬레이션).");
    assert!(state.payload.is_some());
}

#[tokio::test]
async fn undecided_rows_never_reach_the_payload() {
    let backend = Arc::new(RecordingBackend::default());
    let service = SubmissionService::new(backend.clone(), config());

    let mut undecided = draft();
    undecided.schedule = vec![ScheduleRowDraft {
        day_of_week: "undecided".to_string(),
        activity_start_time: String::new(),
        activity_end_time: String::new(),
    }];
    let state = service.submit(&undecided).await;

    assert!(state.success);
    let payload = state.payload.expect("payload");
    assert!(payload.schedule.is_empty());

    // the wire JSON omits the field entirely rather than sending []
    let json = serde_json::to_value(&payload).expect("serialize");
    assert!(json.get("schedule").is_none());
}
