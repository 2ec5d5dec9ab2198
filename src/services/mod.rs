pub mod auth;
pub mod submission;

pub use auth::{AuthService, AuthState};
pub use submission::{SubmissionService, SubmissionState};
