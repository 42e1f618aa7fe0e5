// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Health check and API index endpoints.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

/// API information response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [EndpointInfo],
}

/// Endpoint information.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const ENDPOINTS: [EndpointInfo; 3] = [
    EndpointInfo {
        method: "GET",
        path: "/api/v1/health",
        description: "Health check",
    },
    EndpointInfo {
        method: "POST",
        path: "/api/v1/calculate",
        description: "Validated scaffold layout calculation",
    },
    EndpointInfo {
        method: "POST",
        path: "/api/v1/scaffold-line",
        description: "Scaffold line around a footprint polygon",
    },
];

/// GET /api/v1/health - Health check endpoint.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "ashiba-server",
    })
}

/// GET / - API information endpoint.
pub async fn info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "ashiba-server",
        version: env!("CARGO_PKG_VERSION"),
        description: "Scaffold layout calculation server",
        endpoints: &ENDPOINTS,
    })
}
