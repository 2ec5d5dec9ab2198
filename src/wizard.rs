use crate::models::{SignupDraft, StudyDraft};
use crate::validate::{FieldErrors, validate_signup, validate_study};

/// A form that is filled in over a fixed number of steps. Step gating reuses
/// the submission-time rules, so the wizard can never drift from what the
/// final validation accepts.
pub trait MultiStepForm {
    const STEP_COUNT: u8;

    /// Field paths owned by a step (1-indexed). A path also covers nested
    /// paths under it, e.g. `schedule` covers `schedule.0.activity_end_time`.
    fn fields_for_step(step: u8) -> &'static [&'static str];

    fn field_errors(&self) -> FieldErrors;
}

/// Wizard state: current step, forward gating, unconditional back, and a
/// boolean in-flight guard so a submission cannot be dispatched twice.
#[derive(Debug, Clone)]
pub struct Wizard<F: MultiStepForm> {
    form: F,
    step: u8,
    submitting: bool,
    submitted: bool,
}

impl<F: MultiStepForm> Wizard<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            step: 1,
            submitting: false,
            submitted: false,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// A step is complete when none of its fields carry a validation error.
    pub fn step_complete(&self, step: u8) -> bool {
        let errors = self.form.field_errors();
        !F::fields_for_step(step).iter().any(|field| {
            errors
                .keys()
                .any(|path| path == field || path.starts_with(&format!("{field}.")))
        })
    }

    /// Move forward one step. Refused when the current step is incomplete,
    /// already on the last step, or the wizard is done.
    pub fn advance(&mut self) -> bool {
        if self.submitted || self.step >= F::STEP_COUNT || !self.step_complete(self.step) {
            return false;
        }
        self.step += 1;
        true
    }

    /// Move back one step; always allowed while the wizard is live.
    pub fn back(&mut self) -> bool {
        if self.submitted || self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Claim the in-flight slot before dispatching. Returns false when a
    /// submission is already running or the wizard has finished.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || self.submitted {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Record the outcome. Success is terminal; failure re-opens the form
    /// with all entered input intact.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.submitted = true;
        }
    }
}

impl MultiStepForm for StudyDraft {
    const STEP_COUNT: u8 = 4;

    // name/level -> details -> tech stack -> description
    fn fields_for_step(step: u8) -> &'static [&'static str] {
        match step {
            1 => &["activity_name", "level"],
            2 => &[
                "campus",
                "max_member",
                "min_member",
                "duration_week",
                "schedule",
            ],
            3 => &["activity_stack"],
            _ => &["activity_description"],
        }
    }

    fn field_errors(&self) -> FieldErrors {
        validate_study(self).err().unwrap_or_default()
    }
}

impl MultiStepForm for SignupDraft {
    const STEP_COUNT: u8 = 4;

    // referral -> personal info -> campus/identity -> motivation
    fn fields_for_step(step: u8) -> &'static [&'static str] {
        match step {
            1 => &[],
            2 => &["name", "gender", "birthdate", "phone"],
            3 => &["major", "student_id", "status", "campus"],
            _ => &["reason", "experience"],
        }
    }

    fn field_errors(&self) -> FieldErrors {
        validate_signup(self).err().unwrap_or_default()
    }
}
