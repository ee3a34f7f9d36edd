use crate::io_struct::ErrorEnvelope;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Everything that can go wrong while serving one analysis request.
///
/// The source service collapsed all of these to a plain 500 with a string
/// body; the kinds are kept distinct here so the status mapping stays a pure
/// function of the kind, but the wire-visible codes are preserved.
#[derive(Debug)]
pub enum AnalyzeError {
    /// Request body was not JSON, or did not carry a string `image_base64`.
    InvalidBody(String),
    /// No OpenAI credential was configured at startup.
    MissingApiKey,
    /// Upstream answered with a non-success status; carries the raw body.
    Upstream(String),
    /// The outbound call itself failed (connect error, timeout).
    Transport(reqwest::Error),
    /// Upstream answered 200 but not in the expected shape.
    MalformedReply(String),
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::InvalidBody(msg) => write!(f, "Invalid request body: {}", msg),
            AnalyzeError::MissingApiKey => write!(f, "OpenAI API key not configured"),
            AnalyzeError::Upstream(body) => write!(f, "OpenAI API error: {}", body),
            AnalyzeError::Transport(e) => write!(f, "{}", e),
            AnalyzeError::MalformedReply(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AnalyzeError {}

impl From<reqwest::Error> for AnalyzeError {
    fn from(e: reqwest::Error) -> Self {
        AnalyzeError::Transport(e)
    }
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::InvalidBody(_)
            | AnalyzeError::MissingApiKey
            | AnalyzeError::Upstream(_)
            | AnalyzeError::Transport(_)
            | AnalyzeError::MalformedReply(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(("Access-Control-Allow-Origin", "*"))
            .json(ErrorEnvelope::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message_is_exact() {
        assert_eq!(
            AnalyzeError::MissingApiKey.to_string(),
            "OpenAI API key not configured"
        );
    }

    #[test]
    fn test_upstream_body_passes_through() {
        let e = AnalyzeError::Upstream("{\"message\":\"rate limited\"}".to_string());
        assert_eq!(e.to_string(), "OpenAI API error: {\"message\":\"rate limited\"}");
    }

    #[test]
    fn test_all_kinds_map_to_500() {
        let kinds = [
            AnalyzeError::InvalidBody("x".to_string()),
            AnalyzeError::MissingApiKey,
            AnalyzeError::Upstream("x".to_string()),
            AnalyzeError::MalformedReply("x".to_string()),
        ];
        for e in kinds {
            assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
