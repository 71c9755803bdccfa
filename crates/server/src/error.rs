use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types.
///
/// Every variant renders as the `{ "success": false, "error": "..." }`
/// envelope so clients can branch on a single shape. Fatal pipeline steps
/// (upload, preprocessing, OCR) surface here; degradable steps never do.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    UnsupportedMedia(String),

    #[error("Falha no pré-processamento da imagem: {0}")]
    Preprocess(String),

    #[error("Falha no reconhecimento de texto: {0}")]
    Ocr(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

impl ServerError {
    /// HTTP status code for this error.
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ServerError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ServerError::BadRequest(_) | ServerError::UnsupportedMedia(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Preprocess(_)
            | ServerError::Ocr(_)
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_pipeline_errors_are_server_side() {
        assert_eq!(
            ServerError::Ocr("tesseract exited".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Preprocess("decode".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upload_rejections_are_client_side() {
        assert_eq!(
            ServerError::UnsupportedMedia("Apenas imagens JPG são aceitas".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::BadRequest("Nenhum arquivo foi enviado".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
