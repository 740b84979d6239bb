use std::collections::BTreeMap;

use super::state::FormFields;
use super::{Field, FormVariant};
use crate::config;
use crate::form::file::accepts_mime;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const JOB_DESCRIPTION_REQUIRED: &str = "Job description is required";
pub const JOB_DESCRIPTION_TOO_SHORT: &str = "Job description must be at least 10 characters";
pub const FILE_REQUIRED: &str = "CV file is required";
pub const FILE_NOT_PDF: &str = "Only PDF files are allowed";

/// Per-field error messages. A field with no entry is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate(variant: FormVariant, fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if trim_pattern_space(&fields.name).is_empty() {
        errors.set(Field::Name, NAME_REQUIRED);
    }

    if trim_pattern_space(&fields.email).is_empty() {
        errors.set(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&fields.email) {
        errors.set(Field::Email, EMAIL_INVALID);
    }

    if variant.requires_job_description() {
        let length = trim_pattern_space(&fields.job_description).chars().count();
        if length == 0 {
            errors.set(Field::JobDescription, JOB_DESCRIPTION_REQUIRED);
        } else if length < config::MIN_JOB_DESCRIPTION_CHARS {
            errors.set(Field::JobDescription, JOB_DESCRIPTION_TOO_SHORT);
        }
    }

    match &fields.file {
        None => errors.set(Field::File, FILE_REQUIRED),
        Some(file) if !accepts_mime(&file.mime_type) => errors.set(Field::File, FILE_NOT_PDF),
        Some(_) => {}
    }

    errors
}

/// `local@domain.tld` shape: the whole value must match
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`, with `\s` taken in its ECMAScript sense.
pub fn is_valid_email(value: &str) -> bool {
    let is_atom = |s: &str| !s.is_empty() && !s.chars().any(|c| is_pattern_space(c) || c == '@');

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if !is_atom(local) {
        return false;
    }
    // Any dot with non-empty atoms on both sides will do, not just the last one.
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| is_atom(&domain[..i]) && is_atom(&domain[i + 1..]))
}

/// The `\s` class of an ECMAScript regex. It differs from
/// `char::is_whitespace`: U+FEFF is included, U+0085 is not.
fn is_pattern_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn trim_pattern_space(value: &str) -> &str {
    value.trim_matches(is_pattern_space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::file::CvFile;

    fn pdf() -> CvFile {
        CvFile::new("resume.pdf", "application/pdf", b"%PDF-1.7".to_vec())
    }

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            job_description: "Senior analytical engine programmer".to_string(),
            file: Some(pdf()),
        }
    }

    #[test]
    fn valid_fields_produce_no_errors() {
        assert!(validate(FormVariant::JobMatch, &valid_fields()).is_empty());
        assert!(validate(FormVariant::Quick, &valid_fields()).is_empty());
    }

    #[test]
    fn blank_name_is_required() {
        for name in ["", "   ", "\t\n"] {
            let fields = FormFields { name: name.to_string(), ..valid_fields() };
            let errors = validate(FormVariant::Quick, &fields);
            assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn blank_email_is_required_not_invalid() {
        let fields = FormFields { email: "  ".to_string(), ..valid_fields() };
        assert_eq!(validate(FormVariant::Quick, &fields).get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn malformed_emails_are_flagged() {
        for email in [
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@.com",
            "ada@example.",
            "ada lovelace@example.com",
            "ada@exa mple.com",
            "ada@@example.com",
            "ada@example@com.org",
        ] {
            let fields = FormFields { email: email.to_string(), ..valid_fields() };
            assert_eq!(
                validate(FormVariant::Quick, &fields).get(Field::Email),
                Some(EMAIL_INVALID),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn well_formed_emails_pass() {
        for email in [
            "a@b.c",
            "ada@example.com",
            "first.last+tag@mail.example.co.uk",
            "x@sub..domain.io",
            "ünïcode@exämple.de",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn job_description_only_checked_for_job_match() {
        let fields = FormFields { job_description: String::new(), ..valid_fields() };
        assert_eq!(validate(FormVariant::Quick, &fields).get(Field::JobDescription), None);
        assert_eq!(
            validate(FormVariant::JobMatch, &fields).get(Field::JobDescription),
            Some(JOB_DESCRIPTION_REQUIRED)
        );
    }

    #[test]
    fn job_description_length_boundary() {
        for len in 1..10 {
            let fields = FormFields { job_description: format!("  {}  ", "x".repeat(len)), ..valid_fields() };
            assert_eq!(
                validate(FormVariant::JobMatch, &fields).get(Field::JobDescription),
                Some(JOB_DESCRIPTION_TOO_SHORT)
            );
        }
        for len in [10, 11, 500] {
            let fields = FormFields { job_description: "x".repeat(len), ..valid_fields() };
            assert_eq!(validate(FormVariant::JobMatch, &fields).get(Field::JobDescription), None);
        }
    }

    #[test]
    fn job_description_counts_characters_not_bytes() {
        let fields = FormFields { job_description: "ééééé".to_string(), ..valid_fields() };
        assert_eq!(
            validate(FormVariant::JobMatch, &fields).get(Field::JobDescription),
            Some(JOB_DESCRIPTION_TOO_SHORT)
        );
    }

    #[test]
    fn missing_or_non_pdf_file() {
        let fields = FormFields { file: None, ..valid_fields() };
        assert_eq!(validate(FormVariant::Quick, &fields).get(Field::File), Some(FILE_REQUIRED));

        let docx = CvFile::new("cv.docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document", vec![]);
        let fields = FormFields { file: Some(docx), ..valid_fields() };
        assert_eq!(validate(FormVariant::Quick, &fields).get(Field::File), Some(FILE_NOT_PDF));
    }

    #[test]
    fn every_failing_field_is_reported_at_once() {
        let errors = validate(FormVariant::JobMatch, &FormFields::default());
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::JobDescription), Some(JOB_DESCRIPTION_REQUIRED));
        assert_eq!(errors.get(Field::File), Some(FILE_REQUIRED));
    }

    #[test]
    fn email_whitespace_follows_the_pattern_class() {
        assert!(!is_valid_email("a\u{FEFF}b@c.d"));
        assert!(!is_valid_email("a@c\u{A0}x.d"));
        assert!(!is_valid_email("a@c.d\u{2009}"));
        assert!(is_valid_email("a\u{85}b@c.d"));
        assert!(is_valid_email("a@c.d\u{200B}"));
    }
}
