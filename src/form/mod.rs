pub mod file;
pub mod state;
pub mod submit;
pub mod validation;

use crate::config;

/// A form input that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    JobDescription,
    File,
}

/// The two lead forms on the page. They share validation and submission
/// but differ in what they ask for, how the webhook keys are spelled and
/// how success is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Inline upload: name, email and CV. Closes right after the webhook accepts it.
    Quick,
    /// Modal form that also asks for the target job description and ends on a
    /// "complete" screen.
    JobMatch,
}

impl FormVariant {
    pub fn requires_job_description(self) -> bool {
        matches!(self, FormVariant::JobMatch)
    }

    /// Multipart key used for `field` in the webhook payload.
    pub fn field_key(self, field: Field) -> &'static str {
        match (self, field) {
            (FormVariant::Quick, Field::Name) => "name",
            (FormVariant::Quick, Field::Email) => "email",
            (FormVariant::Quick, Field::JobDescription) => "job_description",
            (FormVariant::Quick, Field::File) => "cv",
            (FormVariant::JobMatch, Field::Name) => "Name",
            (FormVariant::JobMatch, Field::Email) => "Email",
            (FormVariant::JobMatch, Field::JobDescription) => "Job Description",
            (FormVariant::JobMatch, Field::File) => "CV",
        }
    }

    /// Fields sent to the webhook, in payload order.
    pub fn payload_fields(self) -> &'static [Field] {
        match self {
            FormVariant::Quick => &[Field::Name, Field::Email, Field::File],
            FormVariant::JobMatch => &[Field::Name, Field::Email, Field::JobDescription, Field::File],
        }
    }

    /// Delay between webhook success and the complete screen, if any.
    pub fn success_delay_ms(self) -> Option<u32> {
        match self {
            FormVariant::Quick => None,
            FormVariant::JobMatch => Some(config::SIMULATED_ANALYSIS_DELAY_MS),
        }
    }

    pub fn dom_prefix(self) -> &'static str {
        match self {
            FormVariant::Quick => "quick",
            FormVariant::JobMatch => "match",
        }
    }
}
