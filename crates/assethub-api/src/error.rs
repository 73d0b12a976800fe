//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl for `AppError` and the `ApiErrorResponse` body
//! live in `assethub-core` alongside `AppError` itself (trait coherence
//! requires the impl to sit in the crate that owns the type).

pub use assethub_core::error::ApiErrorResponse;

#[cfg(test)]
mod tests {
    use assethub_core::error::{AppError, FieldViolation};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::validation("bad"), StatusCode::BAD_REQUEST),
            (AppError::not_found("gone"), StatusCode::NOT_FOUND),
            (AppError::conflict("dup"), StatusCode::CONFLICT),
            (
                AppError::database("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let response =
            AppError::database("connection refused to db-host:5432").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_response_is_bad_request_with_violations() {
        let err = AppError::validation_failed(vec![FieldViolation::new(
            "ip_address",
            "invalid IP address",
        )]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
