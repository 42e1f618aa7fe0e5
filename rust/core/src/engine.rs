// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calculation orchestration: one face per axis, one stage plan, one record.

use tracing::debug;

use crate::error::{Error, Result};
use crate::faces::{calculate_face, FaceInput};
use crate::stages::plan_stages;
use crate::types::{ScaffoldCalculationResult, ScaffoldInput};
use crate::validation::validate;

/// Runs the whole calculation on pre-validated input.
///
/// Total by construction: every outcome of the face and stage passes maps
/// to a legal record, with shortfalls carried as annotations and flags.
pub fn calculate(input: &ScaffoldInput) -> ScaffoldCalculationResult {
    // the NS face runs east-to-west: its left side faces east
    let ns = calculate_face(&FaceInput {
        width: input.width_ns,
        eaves_left: input.eaves_e,
        eaves_right: input.eaves_w,
        boundary_left: input.boundary_e,
        boundary_right: input.boundary_w,
        target_left: input.target_margin_e,
        target_right: input.target_margin_w,
        specials_150: input.use_150_ns,
        specials_300: input.use_300_ns,
        specials_355: input.use_355_ns,
    });
    // the EW face runs south-to-north: its left side faces south
    let ew = calculate_face(&FaceInput {
        width: input.width_ew,
        eaves_left: input.eaves_s,
        eaves_right: input.eaves_n,
        boundary_left: input.boundary_s,
        boundary_right: input.boundary_n,
        target_left: input.target_margin_s,
        target_right: input.target_margin_n,
        specials_150: input.use_150_ew,
        specials_300: input.use_300_ew,
        specials_355: input.use_355_ew,
    });

    let stages = plan_stages(
        input.standard_height,
        input.roof_shape,
        input.tie_column,
        input.railing_count,
    );

    debug!(
        ns_total_span = ns.total_span,
        ew_total_span = ew.total_span,
        num_stages = stages.num_stages,
        "calculation assembled"
    );

    ScaffoldCalculationResult {
        ns_total_span: ns.total_span,
        ew_total_span: ew.total_span,
        ns_span_structure: ns.span_structure(),
        ew_span_structure: ew.span_structure(),
        north_gap: ew.right.render(),
        south_gap: ew.left.render(),
        east_gap: ns.left.render(),
        west_gap: ns.right.render(),
        num_stages: stages.num_stages,
        modules_count: stages.modules_count,
        jack_up_height: stages.jack_up_height,
        first_layer_height: stages.first_layer_height,
        tie_ok: stages.tie_ok,
        tie_column_used: stages.tie_column_used,
    }
}

/// Validates the input, then calculates.
pub fn calculate_checked(input: &ScaffoldInput) -> Result<ScaffoldCalculationResult> {
    let report = validate(input);
    if !report.is_empty() {
        return Err(Error::InvalidInput(report));
    }
    Ok(calculate(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoofShape;

    fn input() -> ScaffoldInput {
        ScaffoldInput {
            width_ns: 10000,
            width_ew: 8000,
            eaves_n: 500,
            eaves_e: 500,
            eaves_s: 500,
            eaves_w: 500,
            boundary_n: None,
            boundary_e: None,
            boundary_s: None,
            boundary_w: None,
            standard_height: 6000,
            roof_shape: RoofShape::Flat,
            tie_column: true,
            railing_count: 2,
            use_355_ns: 0,
            use_300_ns: 0,
            use_150_ns: 0,
            use_355_ew: 0,
            use_300_ew: 0,
            use_150_ew: 0,
            target_margin_n: Some(900),
            target_margin_e: Some(900),
            target_margin_s: Some(900),
            target_margin_w: Some(900),
        }
    }

    #[test]
    fn faces_map_to_compass_sides() {
        let mut asymmetric = input();
        asymmetric.boundary_e = Some(400);
        let result = calculate(&asymmetric);
        // the capped east side shows the correction, west absorbs the rest
        assert_eq!(result.east_gap, "340 mm(+300)");
        assert_eq!(result.west_gap, "1060 mm");
        assert_eq!(result.north_gap, "950 mm");
        assert_eq!(result.south_gap, "950 mm");
    }

    #[test]
    fn checked_entry_rejects_bad_input() {
        let mut bad = input();
        bad.width_ns = 0;
        let err = calculate_checked(&bad).unwrap_err();
        assert!(err.to_string().contains("width_NS"));
        assert!(calculate_checked(&input()).is_ok());
    }

    #[test]
    fn repeat_calls_are_identical() {
        assert_eq!(calculate(&input()), calculate(&input()));
    }
}
