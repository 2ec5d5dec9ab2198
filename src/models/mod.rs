pub mod member;
pub mod study;

pub use member::{LoginDraft, LoginPayload, SignupDraft, SignupPayload};
pub use study::{
    ActivityType, Campus, DURATION_WEEKS, ScheduleDay, ScheduleRowDraft, ScheduleSlot, Season,
    Semester, StudyDraft, StudyLevel, StudyPayload, ValidatedStudy, WeeklyPlan,
};
