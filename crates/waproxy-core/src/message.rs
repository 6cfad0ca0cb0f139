//! Instance credentials and the typed bodies of the two write operations.

use serde::Serialize;

use crate::chat_id::normalize_chat_id;

/// File name the gateway shows for files sent by URL.
pub const DEFAULT_FILE_NAME: &str = "picture";

/// A gateway instance id paired with its access token.
///
/// Never stored server-side: the page echoes both back in its form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id_instance: String,
    pub api_token_instance: String,
}

impl Credentials {
    /// Build credentials from raw form values. Returns `None` when either is empty.
    pub fn from_form(id_instance: &str, api_token_instance: &str) -> Option<Self> {
        if id_instance.is_empty() || api_token_instance.is_empty() {
            return None;
        }
        Some(Self {
            id_instance: id_instance.to_string(),
            api_token_instance: api_token_instance.to_string(),
        })
    }
}

/// `POST sendMessage` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage {
    pub chat_id: String,
    pub message: String,
}

impl SendMessage {
    /// Normalize the raw chat id and pair it with the message text.
    pub fn new(raw_chat_id: &str, message: &str) -> Self {
        Self {
            chat_id: normalize_chat_id(raw_chat_id),
            message: message.to_string(),
        }
    }
}

/// `POST sendFileByUrl` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileByUrl {
    pub chat_id: String,
    pub file_name: String,
    pub url_file: String,
}

impl SendFileByUrl {
    /// Normalize the raw chat id; the file name is always [`DEFAULT_FILE_NAME`].
    pub fn new(raw_chat_id: &str, url_file: &str) -> Self {
        Self {
            chat_id: normalize_chat_id(raw_chat_id),
            file_name: DEFAULT_FILE_NAME.to_string(),
            url_file: url_file.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(Credentials::from_form("", "token").is_none());
        assert!(Credentials::from_form("1101000001", "").is_none());
        assert!(Credentials::from_form("", "").is_none());

        let creds = Credentials::from_form("1101000001", "token").unwrap();
        assert_eq!(creds.id_instance, "1101000001");
        assert_eq!(creds.api_token_instance, "token");
    }

    #[test]
    fn test_send_message_json_shape() {
        let body = SendMessage::new("79991234567", "hi");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"chatId":"79991234567@c.us","message":"hi"}"#
        );
    }

    #[test]
    fn test_send_message_group_chat() {
        let body = SendMessage::new("family", "dinner at 8");
        assert_eq!(body.chat_id, "family@g.us");
    }

    #[test]
    fn test_send_file_by_url_json_shape() {
        let body = SendFileByUrl::new("12345", "http://x/y.png");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"chatId":"12345@c.us","fileName":"picture","urlFile":"http://x/y.png"}"#
        );
    }

    #[test]
    fn test_message_text_is_json_escaped() {
        let body = SendMessage::new("1", "say \"hi\"\nbye");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"chatId":"1@c.us","message":"say \"hi\"\nbye"}"#);
    }
}
