use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Form;
use serde::Deserialize;

use crate::client::{FeedbackForm, FormField, FormStatus, LocalSubmissionApi};
use crate::models::FeedbackKind;
use crate::state::{AppState, SharedState};

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    theme_class: &'static str,
    brand: String,
    tagline: String,
    name: String,
    email: String,
    content: String,
    bug_selected: bool,
    submit_disabled: bool,
    submitting: bool,
    succeeded: bool,
    failed: bool,
    validation_error: Option<String>,
}

impl FormTemplate {
    fn new(state: &AppState, form: &FeedbackForm) -> Self {
        Self {
            theme_class: state.theme.root_class(),
            brand: state.config.branding.brand.clone(),
            tagline: state.config.branding.tagline.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            content: form.content.clone(),
            bug_selected: form.kind == FeedbackKind::Bug,
            submit_disabled: !form.can_submit(),
            submitting: form.status == FormStatus::Loading,
            succeeded: form.status == FormStatus::Success,
            failed: form.status == FormStatus::Error,
            validation_error: form.validation_error.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FormInput {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

pub async fn page(State(state): State<SharedState>) -> impl IntoResponse {
    render(&state, &FeedbackForm::new())
}

pub async fn submit(
    State(state): State<SharedState>,
    Form(input): Form<FormInput>,
) -> impl IntoResponse {
    let mut form = FeedbackForm::new();
    if let Some(kind) = input.kind.as_deref() {
        form.set_kind(FeedbackKind::from_type(kind));
    }
    form.update(FormField::Name, input.name);
    form.update(FormField::Email, input.email);
    form.update(FormField::Content, input.content);

    let api = LocalSubmissionApi::new(state.clone());
    form.submit(&api).await;

    render(&state, &form)
}

fn render(state: &AppState, form: &FeedbackForm) -> Html<String> {
    let template = FormTemplate::new(state, form);
    Html(template.render().unwrap_or_default())
}
