// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertical stage and jack-up height derivation.

use tracing::debug;

use crate::types::{RoofShape, FIRST_LAYER_MIN, STAGE_UNIT};

/// Large jack-up reduction step with or without a tie column (mm).
const REDUCTION_LARGE: i64 = 475;
/// Final small reduction step available to a tie column (mm).
const REDUCTION_SMALL: i64 = 130;
/// Tie-column heights at or above this keep taking large reductions (mm).
const TIE_LOOP_THRESHOLD: i64 = 550;
/// Minimum height the small reduction step may act on (mm).
const TIE_FINAL_THRESHOLD: i64 = 150;

/// Derived vertical layout for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePlan {
    pub num_stages: u32,
    /// First-layer height above the roof base unit (mm).
    pub first_layer_height: i64,
    /// Jack-up height after reduction (mm).
    pub jack_up_height: i64,
    /// Number of large reduction steps applied.
    pub reduction_loops: u32,
    /// False when a requested tie reduction could not complete.
    pub tie_ok: bool,
    pub tie_column_used: bool,
    /// Vertical frame modules consumed by this layout.
    pub modules_count: u32,
}

/// Splits the standard height into stages and a first layer, then reduces
/// the jack-up height.
///
/// The remainder over the roof base unit is divided into 1900mm stage
/// units; a leftover first layer under 950mm absorbs one stage unit so the
/// bottom layer stays buildable. The identity `base_unit +
/// first_layer_height + (num_stages - 1) * 1900 == standard_height` holds
/// exactly for every height at or above the base unit.
pub fn plan_stages(
    standard_height: i64,
    roof_shape: RoofShape,
    tie_column: bool,
    railing_count: u32,
) -> StagePlan {
    let base_unit = roof_shape.base_unit();
    let remainder = (standard_height - base_unit).max(0);
    let provisional = 1 + remainder / STAGE_UNIT;
    let leftover = remainder - (provisional - 1) * STAGE_UNIT;
    let (num_stages, first_layer_height) = if leftover < FIRST_LAYER_MIN && provisional > 1 {
        (provisional - 1, leftover + STAGE_UNIT)
    } else {
        (provisional, leftover)
    };
    let num_stages = num_stages as u32;

    let (jack_up_height, reduction_loops, tie_ok) = reduce_jack_up(first_layer_height, tie_column);

    let mut modules_count = 4 + (num_stages - 1) * 4 + reduction_loops;
    match railing_count {
        2 => modules_count += 1,
        3 => modules_count += 2,
        _ => {}
    }

    debug!(
        standard_height,
        num_stages,
        first_layer_height,
        jack_up_height,
        tie_ok,
        "stage plan derived"
    );

    StagePlan {
        num_stages,
        first_layer_height,
        jack_up_height,
        reduction_loops,
        tie_ok,
        tie_column_used: tie_column,
        modules_count,
    }
}

/// Reduces a first-layer height to its jack-up height.
///
/// With a tie column, 475mm steps apply while the height stays at or above
/// 550mm, then one 130mm step finishes if at least 150mm remains; when it
/// does not, the reduction is abandoned and the unreduced height stands.
/// Without a tie column only the 475mm loop applies.
fn reduce_jack_up(first_layer: i64, tie_column: bool) -> (i64, u32, bool) {
    let mut height = first_layer;
    let mut loops = 0u32;
    if !tie_column {
        while height >= REDUCTION_LARGE {
            height -= REDUCTION_LARGE;
            loops += 1;
        }
        return (height, loops, true);
    }

    if height >= TIE_LOOP_THRESHOLD {
        while height >= TIE_LOOP_THRESHOLD {
            height -= REDUCTION_LARGE;
            loops += 1;
        }
        if height >= TIE_FINAL_THRESHOLD {
            (height - REDUCTION_SMALL, loops, true)
        } else {
            (first_layer, 0, false)
        }
    } else if height >= TIE_FINAL_THRESHOLD {
        (height - REDUCTION_SMALL, 0, true)
    } else {
        (first_layer, 0, false)
    }
}
