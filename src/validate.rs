use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::models::{
    ActivityType, Campus, LoginDraft, LoginPayload, SignupDraft, SignupPayload, StudyDraft,
    StudyLevel, ValidatedStudy,
};
use crate::normalize::{digits_only, time_to_minutes, to_canonical_enum};

/// Dot-joined field path to a single message. One message per path; the last
/// issue recorded for a path wins, mirroring how the client renders errors.
pub type FieldErrors = BTreeMap<String, String>;

const DEFAULT_MIN_MEMBER: u8 = 2;
const MSG_START_TIME_REQUIRED: &str = "시작 시간을 선택하세요.";
const MSG_END_AFTER_START: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";
const MSG_MIN_OVER_MAX: &str = "최소 인원은 모집 인원보다 클 수 없습니다.";
const MSG_CHECK_INPUT: &str = "입력값을 확인해주세요.";

/// Field-level rules referenced from the draft derives. Each rule owns the
/// exact user-facing message for its field.
pub mod rules {
    use std::borrow::Cow;

    use validator::ValidationError;

    use crate::models::{ActivityType, Campus, DURATION_WEEKS, StudyLevel};
    use crate::normalize::full_day_name;

    fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Borrowed(message));
        error
    }

    pub fn study_name(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "스터디 이름을 입력하세요."));
        }
        if value.chars().count() > 15 {
            return Err(rule_error("too_long", "스터디 이름은 15자 이하여야 합니다."));
        }
        Ok(())
    }

    pub fn study_description(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "활동 소개를 입력하세요."));
        }
        if value.chars().count() > 2000 {
            return Err(rule_error("too_long", "활동 소개가 너무 깁니다."));
        }
        Ok(())
    }

    pub fn activity_type(value: &str) -> Result<(), ValidationError> {
        ActivityType::from_token(value)
            .map(|_| ())
            .ok_or_else(|| rule_error("enum", "활동 유형을 선택하세요."))
    }

    pub fn level_token(value: &str) -> Result<(), ValidationError> {
        StudyLevel::from_token(value)
            .map(|_| ())
            .ok_or_else(|| rule_error("enum", "난이도를 선택하세요."))
    }

    pub fn campus_token(value: &str) -> Result<(), ValidationError> {
        Campus::from_token(value)
            .map(|_| ())
            .ok_or_else(|| rule_error("enum", "캠퍼스를 선택하세요."))
    }

    pub fn max_member(value: &str) -> Result<(), ValidationError> {
        let count: i64 = value
            .trim()
            .parse()
            .map_err(|_| rule_error("invalid", "모집 인원을 입력하세요."))?;
        if count < 2 {
            return Err(rule_error("too_small", "최소 2명"));
        }
        if count > 20 {
            return Err(rule_error("too_large", "최대 20명"));
        }
        Ok(())
    }

    pub fn min_member(value: &str) -> Result<(), ValidationError> {
        let count: i64 = value
            .trim()
            .parse()
            .map_err(|_| rule_error("invalid", "최소 인원을 입력하세요."))?;
        if !(1..=20).contains(&count) {
            return Err(rule_error("range", "최소 인원은 1~20명 사이여야 합니다."));
        }
        Ok(())
    }

    pub fn duration_week(value: &str) -> Result<(), ValidationError> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|weeks| DURATION_WEEKS.contains(weeks))
            .map(|_| ())
            .ok_or_else(|| rule_error("enum", "진행 기간을 선택하세요."))
    }

    pub fn day_token(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() || value == "undecided" || full_day_name(value).is_some() {
            return Ok(());
        }
        Err(rule_error("enum", "요일을 선택하세요."))
    }

    pub fn member_name(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "이름은 필수입니다"));
        }
        Ok(())
    }

    pub fn gender_token(value: &str) -> Result<(), ValidationError> {
        match value {
            "male" | "female" => Ok(()),
            _ => Err(rule_error("enum", "성별을 선택하세요")),
        }
    }

    pub fn birthdate(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "생년월일은 필수입니다"));
        }
        Ok(())
    }

    pub fn phone(value: &str) -> Result<(), ValidationError> {
        if value.chars().count() < 9 {
            return Err(rule_error("too_short", "전화번호를 올바르게 입력하세요"));
        }
        Ok(())
    }

    pub fn major(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "학과를 입력하세요"));
        }
        Ok(())
    }

    pub fn student_id(value: &str) -> Result<(), ValidationError> {
        if value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()) {
            return Ok(());
        }
        Err(rule_error("format", "학번은 숫자 10자리여야 합니다"))
    }

    pub fn status_token(value: &str) -> Result<(), ValidationError> {
        match value {
            "enrolled" | "graduated" | "on_leave" => Ok(()),
            _ => Err(rule_error("enum", "학적 상태를 선택하세요")),
        }
    }

    pub fn member_campus_token(value: &str) -> Result<(), ValidationError> {
        match value {
            "seoul" | "suwon" | "cheon_an" => Ok(()),
            _ => Err(rule_error("enum", "캠퍼스를 선택하세요")),
        }
    }

    pub fn join_reason(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "가입 이유를 입력하세요"));
        }
        Ok(())
    }

    pub fn dev_experience(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "개발 경험을 입력하세요"));
        }
        Ok(())
    }

    pub fn password(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(rule_error("required", "비밀번호를 입력하세요"));
        }
        Ok(())
    }
}

/// Collapse `ValidationErrors` into the field-path map contract.
pub fn flatten_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    collect_errors(errors, None, &mut out);
    out
}

fn collect_errors(errors: &ValidationErrors, prefix: Option<&str>, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(error) = list.last() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.insert(path, message);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_errors(inner, Some(&path), out),
            ValidationErrorsKind::List(rows) => {
                for (index, inner) in rows {
                    let row_path = format!("{path}.{index}");
                    collect_errors(inner, Some(&row_path), out);
                }
            }
        }
    }
}

/// Cross-field rules, applied after field rules so a later message wins the
/// path. Rows without a decided day are not yet filled in and are skipped.
fn refine_study(draft: &StudyDraft, errors: &mut FieldErrors) {
    let max = member_count(&draft.max_member);
    let min = draft.min_member.as_deref().and_then(member_count);
    if let (Some(max), Some(min)) = (max, min) {
        if max < min {
            errors.insert("min_member".to_string(), MSG_MIN_OVER_MAX.to_string());
        }
    }

    for (index, row) in draft.schedule.iter().enumerate() {
        if row.decided_day().is_none() {
            continue;
        }
        if row.activity_start_time.is_empty() || row.activity_end_time.is_empty() {
            errors.insert(
                format!("schedule.{index}.activity_start_time"),
                MSG_START_TIME_REQUIRED.to_string(),
            );
            continue;
        }
        if let (Some(start), Some(end)) = (
            time_to_minutes(&row.activity_start_time),
            time_to_minutes(&row.activity_end_time),
        ) {
            if end <= start {
                errors.insert(
                    format!("schedule.{index}.activity_end_time"),
                    MSG_END_AFTER_START.to_string(),
                );
            }
        }
    }
}

fn member_count(value: &str) -> Option<u8> {
    value.trim().parse().ok()
}

fn dedup_tags(tags: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(tag) {
            seen.push(tag.clone());
        }
    }
    seen
}

/// Validate a study draft into fully-typed data, or the complete error map.
/// Field rules run first in declaration order, then cross-field rules in row
/// order; nothing short-circuits.
pub fn validate_study(draft: &StudyDraft) -> Result<ValidatedStudy, FieldErrors> {
    let mut errors = match draft.validate() {
        Ok(()) => FieldErrors::new(),
        Err(raw) => flatten_errors(&raw),
    };
    refine_study(draft, &mut errors);

    let typed = (
        StudyLevel::from_token(&draft.level),
        Campus::from_token(&draft.campus),
        ActivityType::from_token(&draft.activity_type),
        member_count(&draft.max_member),
        draft
            .min_member
            .as_deref()
            .map_or(Some(DEFAULT_MIN_MEMBER), member_count),
        draft.duration_week.trim().parse::<u8>().ok(),
    );
    match typed {
        (Some(level), Some(campus), Some(activity_type), Some(max), Some(min), Some(weeks))
            if errors.is_empty() =>
        {
            Ok(ValidatedStudy {
                name: draft.activity_name.clone(),
                activity_type,
                description: draft.activity_description.clone(),
                level,
                campus,
                max_member: max,
                min_member: min,
                duration_week: weeks,
                schedule: draft.schedule.clone(),
                tags: dedup_tags(&draft.activity_stack),
                has_image: draft.activity_image,
            })
        }
        _ => {
            if errors.is_empty() {
                errors.insert("form".to_string(), MSG_CHECK_INPUT.to_string());
            }
            Err(errors)
        }
    }
}

/// Validate a signup draft and map it onto the auth API payload shape.
pub fn validate_signup(draft: &SignupDraft) -> Result<SignupPayload, FieldErrors> {
    draft.validate().map_err(|raw| flatten_errors(&raw))?;
    Ok(SignupPayload {
        name: draft.name.clone(),
        student_id: draft.student_id.clone(),
        birth_date: draft.birthdate.clone(),
        phone_number: digits_only(&draft.phone, 11),
        gender: to_canonical_enum(&draft.gender),
        department: draft.major.clone(),
        enrollment_status: to_canonical_enum(&draft.status),
        campus: to_canonical_enum(&draft.campus),
        join_reason: draft.reason.clone(),
        dev_experience: draft.experience.clone(),
        is_fee_paid: false,
    })
}

pub fn validate_login(draft: &LoginDraft) -> Result<LoginPayload, FieldErrors> {
    draft.validate().map_err(|raw| flatten_errors(&raw))?;
    Ok(LoginPayload {
        student_id: draft.student_id.clone(),
        password: draft.password.clone(),
    })
}
