use serde::{Deserialize, Serialize};

/// Тело ответа мутирующих эндпоинтов: `{"message": ...}` при успехе,
/// `{"error": ...}` при ошибке.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiMessage {
    /// Text worth showing to the user, `error` wins over `message`
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_body() {
        let m: ApiMessage =
            serde_json::from_str(r#"{"message": "Catalogue created successfully"}"#).unwrap();
        assert_eq!(m.text(), Some("Catalogue created successfully"));
        assert!(m.error.is_none());
    }

    #[test]
    fn test_error_takes_precedence() {
        let m: ApiMessage =
            serde_json::from_str(r#"{"message": "ignored", "error": "Catalogue not found"}"#)
                .unwrap();
        assert_eq!(m.text(), Some("Catalogue not found"));
    }

    #[test]
    fn test_empty_body_has_no_text() {
        let m: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(m.text(), None);
        let blank = ApiMessage {
            message: None,
            error: Some("  ".into()),
        };
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_serialize_skips_missing_keys() {
        let body = ApiMessage {
            message: Some("ok".into()),
            error: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"ok"}"#);
    }
}
