use crate::models::{FeedbackKind, Submission};

use super::SubmissionApi;

pub const DETAILS_REQUIRED: &str = "The \"Details\" field must be filled.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Content,
    Name,
    Email,
}

/// Draft state of one feedback form session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    pub kind: FeedbackKind,
    pub content: String,
    pub name: String,
    pub email: String,
    pub status: FormStatus,
    pub validation_error: Option<String>,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kind(&mut self, kind: FeedbackKind) {
        self.kind = kind;
    }

    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Content => self.content = value,
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
        }
    }

    /// Submit control is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Loading
    }

    pub fn to_submission(&self) -> Submission {
        Submission {
            kind: Some(self.kind.as_str().to_string()),
            content: Some(self.content.clone()),
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
        }
    }

    /// Validate and send the draft.
    ///
    /// A blank Details field only sets the validation message: no request is
    /// issued and `status` keeps its previous value. On success the free-text
    /// fields are cleared (the type is kept); on failure everything stays so
    /// the user can retry.
    pub async fn submit<A>(&mut self, api: &A)
    where
        A: SubmissionApi + ?Sized,
    {
        if self.content.trim().is_empty() {
            self.validation_error = Some(DETAILS_REQUIRED.to_string());
            return;
        }

        self.validation_error = None;
        self.status = FormStatus::Loading;

        match api.submit(&self.to_submission()).await {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.content.clear();
                self.name.clear();
                self.email.clear();
            }
            Err(_) => self.status = FormStatus::Error,
        }
    }
}
