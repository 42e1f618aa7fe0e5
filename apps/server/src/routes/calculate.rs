// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scaffold calculation endpoint.

use axum::Json;

use ashiba_core::{calculate_checked, ScaffoldCalculationResult, ScaffoldInput};

use crate::error::ApiError;

/// POST /api/v1/calculate - Validated scaffold layout calculation.
pub async fn run(
    Json(input): Json<ScaffoldInput>,
) -> Result<Json<ScaffoldCalculationResult>, ApiError> {
    let result = calculate_checked(&input)?;

    tracing::debug!(
        ns_total_span = result.ns_total_span,
        ew_total_span = result.ew_total_span,
        num_stages = result.num_stages,
        "calculation served"
    );

    Ok(Json(result))
}
