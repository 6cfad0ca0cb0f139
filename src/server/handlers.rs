//! The `/` handler: decode the form, pick the action, call the gateway, render.

use super::render::{self, IndexPage};
use super::AppState;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::debug;
use waproxy_core::message::{Credentials, SendFileByUrl, SendMessage};
use waproxy_gateway::Operation;

/// Every field the page can submit. Absent fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct ActionForm {
    pub action: String,
    pub id_instance: String,
    pub api_token_instance: String,
    pub chat_id: String,
    pub message: String,
    /// The file form has its own chat id input.
    pub chat_id2: String,
    pub url_file: String,
}

/// Query-string fields consulted on POST, where `Form` reads only the body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ActionQuery {
    pub action: String,
}

/// Value of the `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    GetSettings,
    GetStateInstance,
    SendMessage,
    SendFileByUrl,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "/getSettings" => Some(Self::GetSettings),
            "/getStateInstance" => Some(Self::GetStateInstance),
            "/sendMessage" => Some(Self::SendMessage),
            "/sendFileByUrl" => Some(Self::SendFileByUrl),
            _ => None,
        }
    }
}

impl ActionForm {
    /// Build the gateway operation for `action` from the submitted fields.
    pub fn operation(&self, action: Action) -> Operation {
        match action {
            Action::GetSettings => Operation::GetSettings,
            Action::GetStateInstance => Operation::GetStateInstance,
            Action::SendMessage => {
                Operation::SendMessage(SendMessage::new(&self.chat_id, &self.message))
            }
            Action::SendFileByUrl => {
                Operation::SendFileByUrl(SendFileByUrl::new(&self.chat_id2, &self.url_file))
            }
        }
    }
}

/// `GET|POST /`.
///
/// Fields come from the query string on GET and the urlencoded body on POST.
/// On POST an `action` in the query string is used when the body has none.
/// An undecodable form is treated as empty, which shows the blank page.
pub(super) async fn home(
    State(state): State<AppState>,
    query: Result<Query<ActionQuery>, QueryRejection>,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Response {
    let mut form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            debug!("ignoring undecodable form: {e}");
            ActionForm::default()
        }
    };
    if form.action.is_empty() {
        if let Ok(Query(query)) = query {
            form.action = query.action;
        }
    }

    let Some(action) = Action::parse(&form.action) else {
        return render::page(&IndexPage::default());
    };

    let Some(credentials) = Credentials::from_form(&form.id_instance, &form.api_token_instance)
    else {
        return Redirect::to("/").into_response();
    };

    let operation = form.operation(action);
    debug!(
        "{} for instance {}",
        operation.name(),
        credentials.id_instance
    );

    let result = match state.gateway.call(&credentials, &operation).await {
        Ok(body) => body,
        Err(e) => e.to_string(),
    };

    render::page(&IndexPage::with_result(&credentials, &result))
}

/// Catch-all 404, also used for `/favicon.ico`.
pub(super) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}
