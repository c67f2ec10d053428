use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::ServerError;

/// Any method a defined path does not support.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Any path with no route.
pub async fn path_not_found(OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::PathNotFound(uri.path().to_string())
}
