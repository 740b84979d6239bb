use thiserror::Error;

use super::file::CvFile;
use super::submit::{build_payload, Payload, SubmitError};
use super::file::accepts_mime;
use super::validation::{validate, ValidationErrors, FILE_NOT_PDF};
use super::{Field, FormVariant};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub job_description: String,
    pub file: Option<CvFile>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Complete,
}

impl SubmissionPhase {
    pub fn is_submitting(self) -> bool {
        self == SubmissionPhase::Submitting
    }

    /// The form may be dismissed in any phase except while a request is in flight.
    pub fn can_close(self) -> bool {
        self != SubmissionPhase::Submitting
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the form has {0} invalid field(s)")]
    Invalid(usize),
    #[error("the form was already submitted, dismiss it first")]
    AlreadyComplete,
    #[error("no submission is in flight")]
    NotSubmitting,
    #[error("the form is not on its complete screen")]
    NotComplete,
}

/// Ticket handed out for each file pick. Only the latest one may store a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilePick(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Stored,
    Rejected,
    /// A newer pick, a reset or a submission happened while this file was being read.
    Stale,
}

/// How a finished webhook call left the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Quick upload accepted: the form is already empty and `Idle` again.
    Closed,
    /// Job match accepted: the form shows its complete screen.
    Completed,
    /// Back to `Idle` with every value kept.
    Failed,
}

/// Field values, their errors and the submission phase of one form instance.
///
/// Every phase change goes through a method here, which rejects moves the
/// UI must never make (a second submit while one is pending, completing a
/// form that was never sent).
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    variant: FormVariant,
    fields: FormFields,
    errors: ValidationErrors,
    phase: SubmissionPhase,
    latest_pick: u32,
}

impl FormState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: FormFields::default(),
            errors: ValidationErrors::default(),
            phase: SubmissionPhase::Idle,
            latest_pick: 0,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn set_name(&mut self, value: String) {
        self.fields.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.fields.email = value;
    }

    pub fn set_job_description(&mut self, value: String) {
        self.fields.job_description = value;
    }

    /// Registers a new pick of a file declared as `mime_type`. Any earlier
    /// pick still being read is invalidated and the stored file is dropped,
    /// since the picker no longer shows it. Returns `None` when there is
    /// nothing to read: the type is rejected outright, or the form is not
    /// editable right now.
    pub fn pick_file(&mut self, mime_type: &str) -> Option<FilePick> {
        if self.phase != SubmissionPhase::Idle {
            return None;
        }
        let pick = self.next_pick();
        self.fields.file = None;
        if accepts_mime(mime_type) {
            Some(pick)
        } else {
            self.errors.set(Field::File, FILE_NOT_PDF);
            None
        }
    }

    /// Stores the contents read for `pick`, unless the pick is out of date
    /// or the form is no longer editable.
    pub fn file_loaded(&mut self, pick: FilePick, file: CvFile) -> PickOutcome {
        if pick.0 != self.latest_pick || self.phase != SubmissionPhase::Idle {
            return PickOutcome::Stale;
        }
        if file.is_pdf() {
            self.fields.file = Some(file);
            self.errors.clear(Field::File);
            PickOutcome::Stored
        } else {
            self.errors.set(Field::File, FILE_NOT_PDF);
            PickOutcome::Rejected
        }
    }

    /// Whether `pick` is still the one the picker shows.
    pub fn is_current_pick(&self, pick: FilePick) -> bool {
        pick.0 == self.latest_pick
    }

    /// The picker was emptied.
    pub fn clear_file(&mut self) {
        if self.phase != SubmissionPhase::Idle {
            return;
        }
        self.next_pick();
        self.fields.file = None;
    }

    /// Pick and store in one step, for a file whose contents are already in memory.
    pub fn select_file(&mut self, file: CvFile) -> Result<(), &'static str> {
        match self.pick_file(&file.mime_type) {
            Some(pick) => match self.file_loaded(pick, file) {
                PickOutcome::Stored => Ok(()),
                PickOutcome::Rejected | PickOutcome::Stale => Err(FILE_NOT_PDF),
            },
            None => Err(FILE_NOT_PDF),
        }
    }

    fn next_pick(&mut self) -> FilePick {
        self.latest_pick = self.latest_pick.wrapping_add(1);
        FilePick(self.latest_pick)
    }

    /// Validates and, if every field passes, moves to `Submitting` and
    /// returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<Payload, TransitionError> {
        match self.phase {
            SubmissionPhase::Submitting => return Err(TransitionError::AlreadySubmitting),
            SubmissionPhase::Complete => return Err(TransitionError::AlreadyComplete),
            SubmissionPhase::Idle => {}
        }

        self.errors = validate(self.variant, &self.fields);
        if !self.errors.is_empty() {
            return Err(TransitionError::Invalid(self.errors.len()));
        }

        let payload = build_payload(self.variant, &self.fields);
        self.phase = SubmissionPhase::Submitting;
        Ok(payload)
    }

    /// `Submitting -> Complete`.
    pub fn resolve_success(&mut self) -> Result<(), TransitionError> {
        if !self.phase.is_submitting() {
            return Err(TransitionError::NotSubmitting);
        }
        self.phase = SubmissionPhase::Complete;
        Ok(())
    }

    /// `Submitting -> Idle`, keeping every entered value for a retry.
    pub fn resolve_failure(&mut self) -> Result<(), TransitionError> {
        if !self.phase.is_submitting() {
            return Err(TransitionError::NotSubmitting);
        }
        self.phase = SubmissionPhase::Idle;
        Ok(())
    }

    /// Applies the result of a webhook call started by `begin_submit`. A
    /// successful quick upload goes straight through `Complete` back to an
    /// empty `Idle` form.
    pub fn settle(&mut self, result: &Result<(), SubmitError>) -> Result<Settled, TransitionError> {
        match result {
            Ok(()) => {
                self.resolve_success()?;
                match self.variant {
                    FormVariant::Quick => {
                        self.dismiss()?;
                        Ok(Settled::Closed)
                    }
                    FormVariant::JobMatch => Ok(Settled::Completed),
                }
            }
            Err(_) => {
                self.resolve_failure()?;
                Ok(Settled::Failed)
            }
        }
    }

    /// `Complete -> Idle` with empty fields.
    pub fn dismiss(&mut self) -> Result<(), TransitionError> {
        if self.phase != SubmissionPhase::Complete {
            return Err(TransitionError::NotComplete);
        }
        self.reset();
        Ok(())
    }

    /// Clears the form from `Idle` or `Complete`.
    pub fn close(&mut self) -> Result<(), TransitionError> {
        if !self.phase.can_close() {
            return Err(TransitionError::AlreadySubmitting);
        }
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors = ValidationErrors::default();
        self.phase = SubmissionPhase::Idle;
        // Reads still in flight belong to the form that was just cleared.
        self.next_pick();
    }
}
