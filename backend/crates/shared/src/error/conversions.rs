//! Error conversions - axum integration
//!
//! Body rejections become [`AppError`], and [`AppError`] renders as
//! `{ "ok": false, "error": message }`.

use axum::extract::rejection::{JsonRejection, QueryRejection};

use super::app_error::AppError;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "ok": false,
            "error": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorKind::NotFound, "Not found").into_response();
        assert_eq!(response.status().as_u16(), 404);

        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status().as_u16(), 500);
    }
}
