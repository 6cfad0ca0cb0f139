//! The single HTML page, compiled from `html/index.html`.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;
use waproxy_core::error::WaProxyError;
use waproxy_core::message::Credentials;

/// Render context: the instance credentials to echo back and the last result.
#[derive(Debug, Default, Template)]
#[template(path = "index.html")]
pub(super) struct IndexPage<'a> {
    pub id_instance: &'a str,
    pub api_token_instance: &'a str,
    /// Raw gateway response body, or the error text that replaced it.
    pub result: &'a str,
}

impl<'a> IndexPage<'a> {
    /// Page after a gateway call.
    pub fn with_result(credentials: &'a Credentials, result: &'a str) -> Self {
        Self {
            id_instance: &credentials.id_instance,
            api_token_instance: &credentials.api_token_instance,
            result,
        }
    }

    pub fn to_html(&self) -> Result<String, WaProxyError> {
        self.render()
            .map_err(|e| WaProxyError::Render(e.to_string()))
    }
}

/// Turn a page into a response; a render failure becomes a 500.
pub(super) fn page(page: &IndexPage<'_>) -> Response {
    match page.to_html() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

/// Template filters.
mod filters {
    use std::fmt::Display;

    /// Escape text for a `<pre>` body: only `&` and `<` can change the markup there,
    /// so quotes in JSON bodies come through untouched.
    pub fn pre_text<T: Display>(value: T) -> askama::Result<String> {
        let value = value.to_string();
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                _ => out.push(c),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_text_keeps_quotes() {
        let body = r#"{"wid":"79991234567@c.us"}"#;
        assert_eq!(filters::pre_text(body).unwrap(), body);
    }

    #[test]
    fn test_pre_text_escapes_markup() {
        assert_eq!(
            filters::pre_text("<b>a & b</b>").unwrap(),
            "&lt;b>a &amp; b&lt;/b>"
        );
    }

    #[test]
    fn test_result_rendered_verbatim() {
        let creds = Credentials::from_form("1101000001", "tok").unwrap();
        let body = r#"{"stateInstance":"authorized"}"#;
        let html = IndexPage::with_result(&creds, body).to_html().unwrap();
        assert!(html.contains(&format!(r#"<pre id="result">{body}</pre>"#)));
    }
}
