//! Contact and registration form drafts.

use api::Submission;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{0}` is required")]
    Missing(&'static str),
    #[error("age must be a whole number between 1 and 120")]
    InvalidAge,
}

const AGE_RANGE: std::ops::RangeInclusive<u8> = 1..=120;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<Submission, FormError> {
        Ok(Submission::Contact {
            name: required("name", &self.name)?,
            message: required("message", &self.message)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub age: String,
    pub comment: String,
}

impl RegistrationDraft {
    pub fn validate(&self) -> Result<Submission, FormError> {
        let name = required("name", &self.name)?;
        let surname = required("surname", &self.surname)?;
        let phone = required("phone", &self.phone)?;
        let age = required("age", &self.age)?
            .parse::<u8>()
            .ok()
            .filter(|age| AGE_RANGE.contains(age))
            .ok_or(FormError::InvalidAge)?;
        let comment = self.comment.trim();

        Ok(Submission::Registration {
            name,
            surname,
            phone,
            age,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value.to_string())
    }
}

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
    /// The draft was rejected before anything was sent.
    Invalid(FormError),
}

/// A form's localized status strings.
#[derive(Debug, Clone, Copy)]
pub struct StatusLines<'a> {
    pub success: &'a str,
    pub error: &'a str,
    pub missing: &'a str,
    pub invalid_age: &'a str,
}

impl FormStatus {
    pub fn is_sending(self) -> bool {
        self == FormStatus::Sending
    }

    /// Status line shown under the form. `Sending` has none; the submit
    /// button already says so.
    pub fn message<'a>(self, lines: &StatusLines<'a>) -> Option<&'a str> {
        match self {
            FormStatus::Idle | FormStatus::Sending => None,
            FormStatus::Sent => Some(lines.success),
            FormStatus::Failed => Some(lines.error),
            FormStatus::Invalid(FormError::Missing(_)) => Some(lines.missing),
            FormStatus::Invalid(FormError::InvalidAge) => Some(lines.invalid_age),
        }
    }

    /// BEM modifier for the status line.
    pub fn modifier(self) -> &'static str {
        match self {
            FormStatus::Sent => "form__status--success",
            FormStatus::Failed | FormStatus::Invalid(_) => "form__status--error",
            FormStatus::Idle | FormStatus::Sending => "",
        }
    }
}

/// Validate a draft, giving either the submission to send or the status to show.
pub fn prepare(validated: Result<Submission, FormError>) -> Result<Submission, FormStatus> {
    validated.map_err(|err| {
        tracing::debug!(%err, "form draft rejected");
        FormStatus::Invalid(err)
    })
}

/// Hand a submission to the relay and report how it went.
pub async fn deliver(submission: Submission) -> FormStatus {
    let kind = submission.kind();
    match api::deliver_submission(submission).await {
        Ok(()) => {
            tracing::info!(kind, "form submitted");
            FormStatus::Sent
        }
        Err(err) => {
            tracing::warn!(kind, %err, "form submission failed");
            FormStatus::Failed
        }
    }
}
