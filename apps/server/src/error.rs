// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ashiba_core::Error),

    #[error("Invalid footprint: {0}")]
    Geometry(#[from] ashiba_geometry::Error),

    #[error("Missing clearances: provide either clearances or face_clearances")]
    MissingClearances,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED"),
            ApiError::Geometry(_) => (StatusCode::BAD_REQUEST, "BAD_GEOMETRY"),
            ApiError::MissingClearances => (StatusCode::BAD_REQUEST, "MISSING_CLEARANCES"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_error_class() {
        let err = ApiError::from(ashiba_core::Error::InvalidInput(Default::default()));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::from(ashiba_geometry::Error::TooFewVertices(2));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = ApiError::MissingClearances;
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_body_serializes_flat() {
        let body = ErrorResponse {
            error: "polygon needs at least 3 vertices, got 2".into(),
            code: "BAD_GEOMETRY".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["code"], "BAD_GEOMETRY");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
