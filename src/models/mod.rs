pub mod notification;
pub mod submission;

pub use notification::{Embed, EmbedField, EmbedFooter, WebhookPayload};
pub use submission::{FeedbackKind, Submission};
