use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::normalize::full_day_name;

pub const DURATION_WEEKS: [u8; 4] = [4, 8, 12, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl StudyLevel {
    /// Form token (`easy`/`intermediate`/`hard`) to API level.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "easy" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "hard" => Some(Self::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Campus {
    Seoul,
    Suwon,
    None,
}

impl Campus {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SEOUL" => Some(Self::Seoul),
            "SUWON" => Some(Self::Suwon),
            "NONE" => Some(Self::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Study,
    Project,
    Session,
}

impl ActivityType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "study" => Some(Self::Study),
            "project" => Some(Self::Project),
            "session" => Some(Self::Session),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    Etc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub year: i32,
    pub season: Season,
}

/// One weekly meeting slot as it arrives from the form. `day_of_week` may be
/// `undecided` (or empty), which keeps the row out of the final payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ScheduleRowDraft {
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::day_token"))]
    pub day_of_week: String,
    #[serde(default)]
    pub activity_start_time: String,
    #[serde(default)]
    pub activity_end_time: String,
}

impl ScheduleRowDraft {
    pub fn decided_day(&self) -> Option<ScheduleDay> {
        full_day_name(&self.day_of_week)
    }
}

/// Weekly curriculum entry. Collected by the form but not part of the wire
/// payload until the backend grows a curriculum endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_index: u8,
    #[serde(default)]
    pub learning_plan: String,
}

/// In-progress, unvalidated study submission. Every field mirrors a raw form
/// field; numbers stay strings until validation coerces them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudyDraft {
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::study_name"))]
    pub activity_name: String,
    #[serde(default = "StudyDraft::default_activity_type")]
    #[validate(custom(function = "crate::validate::rules::activity_type"))]
    pub activity_type: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::study_description"))]
    pub activity_description: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::level_token"))]
    pub level: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::campus_token"))]
    pub campus: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::max_member"))]
    pub max_member: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::min_member"))]
    pub min_member: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::rules::duration_week"))]
    pub duration_week: String,
    #[serde(default)]
    #[validate(nested)]
    pub schedule: Vec<ScheduleRowDraft>,
    #[serde(default)]
    pub activity_stack: Vec<String>,
    #[serde(default)]
    pub curriculum: Vec<WeeklyPlan>,
    /// Existence flag only; the upload pipeline lives elsewhere.
    #[serde(default)]
    pub activity_image: bool,
}

impl Default for StudyDraft {
    fn default() -> Self {
        Self {
            activity_name: String::new(),
            activity_type: Self::default_activity_type(),
            activity_description: String::new(),
            level: String::new(),
            campus: String::new(),
            max_member: String::new(),
            min_member: None,
            duration_week: String::new(),
            schedule: Vec::new(),
            activity_stack: Vec::new(),
            curriculum: Vec::new(),
            activity_image: false,
        }
    }
}

impl StudyDraft {
    fn default_activity_type() -> String {
        "study".to_string()
    }

    /// Select or deselect a tech stack tag.
    pub fn toggle_stack(&mut self, stack: &str) {
        if let Some(pos) = self.activity_stack.iter().position(|s| s == stack) {
            self.activity_stack.remove(pos);
        } else {
            self.activity_stack.push(stack.to_string());
        }
    }

    /// Add a user-entered stack. Rejected when empty or already selected.
    pub fn add_custom_stack(&mut self, stack: &str) -> bool {
        let stack = stack.trim();
        if stack.is_empty() || self.activity_stack.iter().any(|s| s == stack) {
            return false;
        }
        self.activity_stack.push(stack.to_string());
        true
    }

    /// Change the duration and resize the weekly curriculum to match,
    /// keeping plans already entered for the surviving weeks.
    pub fn set_duration_weeks(&mut self, weeks: u8) {
        self.duration_week = weeks.to_string();
        self.curriculum = (1..=weeks)
            .map(|week_index| WeeklyPlan {
                week_index,
                learning_plan: self
                    .curriculum
                    .get(usize::from(week_index) - 1)
                    .map(|plan| plan.learning_plan.clone())
                    .unwrap_or_default(),
            })
            .collect();
    }
}

/// Fully-typed result of a successful validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedStudy {
    pub name: String,
    pub activity_type: ActivityType,
    pub description: String,
    pub level: StudyLevel,
    pub campus: Campus,
    pub max_member: u8,
    pub min_member: u8,
    pub duration_week: u8,
    pub schedule: Vec<ScheduleRowDraft>,
    /// Deduplicated, order-preserving.
    pub tags: Vec<String>,
    pub has_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub day: ScheduleDay,
    pub start_time: String,
    pub end_time: String,
}

/// Wire-ready study creation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPayload {
    pub title: String,
    pub description: String,
    pub leader_id: String,
    pub level: StudyLevel,
    pub campus: Campus,
    pub image_url: String,
    pub tags: Vec<String>,
    /// Omitted from the JSON entirely when no decided-day slot exists.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<ScheduleSlot>,
    pub semester: Semester,
}

impl StudyPayload {
    /// Assemble the payload from validated data. Rows without a decided day
    /// or with a missing time are dropped; `leader_id`/`image_url` are
    /// configuration placeholders until the real session/upload paths exist.
    pub fn build(
        study: &ValidatedStudy,
        leader_id: &str,
        image_url: &str,
        semester: Semester,
    ) -> Self {
        let schedule = study
            .schedule
            .iter()
            .filter_map(|row| {
                let day = row.decided_day()?;
                if row.activity_start_time.is_empty() || row.activity_end_time.is_empty() {
                    return None;
                }
                Some(ScheduleSlot {
                    day,
                    start_time: row.activity_start_time.clone(),
                    end_time: row.activity_end_time.clone(),
                })
            })
            .collect();

        Self {
            title: study.name.clone(),
            description: study.description.clone(),
            leader_id: leader_id.to_string(),
            level: study.level,
            campus: study.campus,
            image_url: image_url.to_string(),
            tags: study.tags.clone(),
            schedule,
            semester,
        }
    }
}
