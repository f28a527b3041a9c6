use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Embed, EmbedField, EmbedFooter, FeedbackKind};

/// Longest value the sink accepts in a single embed field, in UTF-16 code units.
pub const MAX_FIELD_VALUE_UNITS: usize = 1024;

const ELLIPSIS: &str = "...";

/// A submission that passed required-field validation.
#[derive(Debug, Clone, Copy)]
pub struct Accepted<'a> {
    pub kind: &'a str,
    pub content: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

pub fn build(submission: &Accepted<'_>, footer_text: &str, at: DateTime<Utc>) -> Embed {
    let kind = FeedbackKind::from_type(submission.kind);

    let mut fields = vec![EmbedField::inline("📝 Type", submission.kind)];
    if let Some(name) = submission.name {
        fields.push(EmbedField::inline("👤 Username", name));
    }
    if let Some(email) = submission.email {
        fields.push(EmbedField::inline("📧 Email", email));
    }
    fields.push(EmbedField::block(
        "📄 Description",
        truncate_field_value(submission.content),
    ));

    Embed {
        title: kind.embed_title().to_string(),
        color: kind.embed_color(),
        fields,
        timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        footer: EmbedFooter {
            text: footer_text.to_string(),
        },
    }
}

/// Cut `value` to at most [`MAX_FIELD_VALUE_UNITS`] UTF-16 code units, marking the cut
/// with an ellipsis. The cut never splits a character.
pub fn truncate_field_value(value: &str) -> String {
    if value.encode_utf16().count() <= MAX_FIELD_VALUE_UNITS {
        return value.to_string();
    }

    let budget = MAX_FIELD_VALUE_UNITS - ELLIPSIS.len();
    let mut used = 0;
    let mut truncated = String::new();
    for c in value.chars() {
        used += c.len_utf16();
        if used > budget {
            break;
        }
        truncated.push(c);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}
