use axum::routing::post;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::models::{LoginDraft, SignupDraft, StudyDraft};
use crate::services::{AuthService, AuthState, SubmissionService, SubmissionState};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/studies", post(create_study))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn create_study(
    State(state): State<AppState>,
    Json(draft): Json<StudyDraft>,
) -> Json<SubmissionState> {
    let service = SubmissionService::new(state.backend.clone(), state.config.clone());
    Json(service.submit(&draft).await)
}

async fn signup(State(state): State<AppState>, Json(draft): Json<SignupDraft>) -> Json<AuthState> {
    let service = AuthService::new(state.backend.clone());
    Json(service.signup(&draft).await)
}

async fn signin(State(state): State<AppState>, Json(draft): Json<LoginDraft>) -> Json<AuthState> {
    let service = AuthService::new(state.backend.clone());
    Json(service.signin(&draft).await)
}
