use serde::{Deserialize, Serialize};

/// Body of `POST /api/submit`. Every field is optional on the wire so that
/// absent and empty values can both be reported as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Submission {
    /// Returns `(type, content)` when both are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let kind = non_empty(self.kind.as_deref())?;
        let content = non_empty(self.content.as_deref())?;
        Some((kind, content))
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    #[default]
    Suggestion,
    Bug,
}

impl FeedbackKind {
    /// Any value other than `Bug` is presented as a suggestion.
    pub fn from_type(value: &str) -> Self {
        if value == "Bug" {
            FeedbackKind::Bug
        } else {
            FeedbackKind::Suggestion
        }
    }

    /// Wire value sent in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "Suggestion",
            FeedbackKind::Bug => "Bug",
        }
    }

    /// Label shown in the page's type selector.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "Suggestion",
            FeedbackKind::Bug => "Bug Report",
        }
    }

    pub fn embed_title(&self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "📨 New Feedback Submission",
            FeedbackKind::Bug => "🐞 New Bug Report",
        }
    }

    pub fn embed_color(&self) -> u32 {
        match self {
            FeedbackKind::Suggestion => 0x00b0f4,
            FeedbackKind::Bug => 0xff4c4c,
        }
    }
}
