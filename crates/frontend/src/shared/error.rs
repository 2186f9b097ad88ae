use thiserror::Error;

/// Ошибка обращения к REST API каталогов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP {status}{}", server_text(.message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

fn server_text(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl ApiError {
    /// Text for the message box.
    ///
    /// `rejected` is used when the server answered with an error status but
    /// no readable body, `transport` when no usable answer came back at all.
    pub fn user_message(&self, rejected: &str, transport: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Rejected { message: None, .. } => rejected.to_string(),
            _ => transport.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 404, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let e = ApiError::Rejected {
            status: 400,
            message: Some("Validation Error: Status cannot be empty.".into()),
        };
        assert_eq!(
            e.user_message("Failed to save", "Request failed"),
            "Validation Error: Status cannot be empty."
        );
    }

    #[test]
    fn test_user_message_fallbacks() {
        let rejected = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(rejected.user_message("Unable to delete", "Delete request failed"), "Unable to delete");

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.user_message("Unable to delete", "Delete request failed"), "Delete request failed");
    }

    #[test]
    fn test_display() {
        let e = ApiError::Rejected {
            status: 404,
            message: Some("Catalogue not found".into()),
        };
        assert_eq!(e.to_string(), "HTTP 404: Catalogue not found");
        assert!(e.is_not_found());
        assert_eq!(
            ApiError::Rejected { status: 500, message: None }.to_string(),
            "HTTP 500"
        );
    }
}
