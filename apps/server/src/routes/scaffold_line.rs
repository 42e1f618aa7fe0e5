// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scaffold-line endpoint for polygon footprints.

use axum::Json;
use serde::Deserialize;

use ashiba_geometry::{
    resolve_clearances, scaffold_line, BuildingPolygon, BuildingVertex, EdgeClearance,
    FaceClearances, ScaffoldBounds, ScaffoldLineResult,
};

use crate::error::ApiError;

/// Scaffold-line request: a footprint plus either one explicit clearance
/// per edge, or per-face defaults with optional per-edge overrides.
#[derive(Debug, Deserialize)]
pub struct ScaffoldLineRequest {
    pub vertices: Vec<BuildingVertex>,
    #[serde(default)]
    pub clearances: Option<Vec<f64>>,
    #[serde(default)]
    pub face_clearances: Option<FaceClearances>,
    #[serde(default)]
    pub edge_clearances: Vec<EdgeClearance>,
    #[serde(default)]
    pub bounds: Option<ScaffoldBounds>,
}

/// POST /api/v1/scaffold-line - Scaffold line around a footprint polygon.
pub async fn generate(
    Json(request): Json<ScaffoldLineRequest>,
) -> Result<Json<ScaffoldLineResult>, ApiError> {
    let polygon = BuildingPolygon::new(request.vertices)?;

    let clearances = match (request.clearances, request.face_clearances) {
        (Some(list), _) => list,
        (None, Some(faces)) => resolve_clearances(&polygon, &faces, &request.edge_clearances)?,
        (None, None) => return Err(ApiError::MissingClearances),
    };

    let result = scaffold_line(&polygon, &clearances, request.bounds.as_ref())?;

    tracing::debug!(
        edges = result.edges.len(),
        out_of_bounds = result.out_of_bounds.len(),
        "scaffold line generated"
    );

    Ok(Json(result))
}
