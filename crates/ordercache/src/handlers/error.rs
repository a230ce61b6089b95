use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ordercache_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::ingest::IngestError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(ingest_error) = self.0.downcast_ref::<IngestError>() {
            ingest_error.status_code()
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordercache_core::order::OrderError;

    #[test]
    fn test_repository_error_status() {
        let err = AppError::from(RepositoryError::order_not_found("a"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_ingest_error_status() {
        let err = AppError::from(IngestError::from(OrderError::NoItems));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(IngestError::QueueFull);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_other_error_is_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_uses_mapped_status() {
        let response = AppError::from(RepositoryError::order_not_found("a")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
