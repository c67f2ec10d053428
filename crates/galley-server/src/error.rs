use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use galley_gate::Rejection;
use galley_types::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// A pipeline stage refused the request.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// The body was not a JSON `{ "data": ... }` envelope.
    #[error("{0}")]
    MalformedBody(String),

    #[error("store error: {0}")]
    Store(#[from] galley_store::StoreError),

    /// A payload passed its pipeline but could not be stored.
    #[error("payload could not be stored: {0}")]
    Materialize(#[from] galley_types::TypeError),

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(rejection) => StatusCode::from_u16(rejection.status_code())
                .unwrap_or(StatusCode::BAD_REQUEST),
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::PathNotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Store(_)
            | Self::Materialize(_)
            | Self::ConfigParse(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_status_passes_through() {
        let err: ServerError = Rejection::NotFound("Order id not found: 4".into()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Order id not found: 4");

        let err: ServerError = Rejection::IllegalTransition("x".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn method_not_allowed_message() {
        let err = ServerError::MethodNotAllowed {
            method: "DELETE".into(),
            path: "/dishes".into(),
        };
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "DELETE not allowed for /dishes");
    }

    #[test]
    fn config_parse_is_server_error() {
        let err: ServerError = toml::from_str::<toml::Table>("bind_addr = ")
            .unwrap_err()
            .into();
        assert!(matches!(err, ServerError::ConfigParse(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("invalid configuration:"));
    }

    #[test]
    fn defects_are_server_errors() {
        let err = ServerError::Internal("boom".into());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
