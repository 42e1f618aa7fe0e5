// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input and result records shared across the calculation pipeline.
//!
//! Field names mirror the storage schema one-for-one; a persisted row is a
//! direct serialization of [`ScaffoldCalculationResult`]. All lengths are
//! integer millimeters. Optional fields distinguish "none" from zero:
//! `None` means no boundary exists (or the minimum clearance applies),
//! while `Some(0)` is a genuine zero-distance constraint.

use serde::{Deserialize, Serialize};

/// Offset kept between a site boundary and the scaffold line (mm).
pub const BOUNDARY_OFFSET: i64 = 60;

/// Clearance added on top of the eave overhang for erection work (mm).
pub const EAVES_CLEARANCE: i64 = 80;

/// Length of the standard frame part (mm).
pub const STANDARD_PART: i64 = 1800;

/// Height of one scaffold stage unit (mm).
pub const STAGE_UNIT: i64 = 1900;

/// First-layer heights below this absorb a whole stage unit (mm).
pub const FIRST_LAYER_MIN: i64 = 950;

/// Roof shape of the building; selects the base-unit height consumed
/// below the first scaffold layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofShape {
    Flat,
    Sloped,
    Deck,
}

impl RoofShape {
    /// Base-unit height for this roof shape (mm).
    pub fn base_unit(self) -> i64 {
        match self {
            RoofShape::Flat => 1700,
            RoofShape::Sloped => 1900,
            RoofShape::Deck => 1800,
        }
    }
}

/// Raw calculation input as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldInput {
    /// Building width along the north-south axis (mm).
    #[serde(rename = "width_NS")]
    pub width_ns: i64,
    /// Building width along the east-west axis (mm).
    #[serde(rename = "width_EW")]
    pub width_ew: i64,
    /// Eave overhang per compass side (mm).
    #[serde(rename = "eaves_N")]
    pub eaves_n: i64,
    #[serde(rename = "eaves_E")]
    pub eaves_e: i64,
    #[serde(rename = "eaves_S")]
    pub eaves_s: i64,
    #[serde(rename = "eaves_W")]
    pub eaves_w: i64,
    /// Distance to the site boundary per side, when one exists (mm).
    #[serde(rename = "boundary_N", default)]
    pub boundary_n: Option<i64>,
    #[serde(rename = "boundary_E", default)]
    pub boundary_e: Option<i64>,
    #[serde(rename = "boundary_S", default)]
    pub boundary_s: Option<i64>,
    #[serde(rename = "boundary_W", default)]
    pub boundary_w: Option<i64>,
    /// Target scaffold height above grade (mm).
    pub standard_height: i64,
    pub roof_shape: RoofShape,
    /// Whether a tie column supports the jack-up stage.
    pub tie_column: bool,
    /// Number of guard-rail levels (0-4).
    pub railing_count: u32,
    /// Mandatory special parts per axis: counts of 355/300/150mm pieces.
    #[serde(rename = "use_355_NS")]
    pub use_355_ns: u32,
    #[serde(rename = "use_300_NS")]
    pub use_300_ns: u32,
    #[serde(rename = "use_150_NS")]
    pub use_150_ns: u32,
    #[serde(rename = "use_355_EW")]
    pub use_355_ew: u32,
    #[serde(rename = "use_300_EW")]
    pub use_300_ew: u32,
    #[serde(rename = "use_150_EW")]
    pub use_150_ew: u32,
    /// Requested clearance per side; `None` falls back to the minimum (mm).
    #[serde(rename = "target_margin_N", default)]
    pub target_margin_n: Option<i64>,
    #[serde(rename = "target_margin_E", default)]
    pub target_margin_e: Option<i64>,
    #[serde(rename = "target_margin_S", default)]
    pub target_margin_s: Option<i64>,
    #[serde(rename = "target_margin_W", default)]
    pub target_margin_w: Option<i64>,
}

/// A per-side clearance outcome: the achieved margin plus an optional
/// correction part the erector should insert to restore the minimum
/// clearance. Rendered to text only at the result-assembly boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginNote {
    /// Achieved margin (mm).
    pub margin: i64,
    /// Correction part length for this side, when the margin fell short (mm).
    pub correction: Option<i64>,
}

impl MarginNote {
    /// Margin with no correction needed.
    pub fn plain(margin: i64) -> Self {
        Self {
            margin,
            correction: None,
        }
    }

    /// Storage-form note text, e.g. `"250 mm(+355)"`.
    pub fn render(&self) -> String {
        match self.correction {
            Some(part) => format!("{} mm(+{})", self.margin, part),
            None => format!("{} mm", self.margin),
        }
    }
}

/// Final calculation record, serialized field-for-field into storage.
///
/// Immutable once assembled; a fresh record is produced per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldCalculationResult {
    /// Total scaffold span along each axis (mm).
    pub ns_total_span: i64,
    pub ew_total_span: i64,
    /// Part composition text per axis, correction annotations embedded.
    pub ns_span_structure: String,
    pub ew_span_structure: String,
    /// Clearance note per compass side.
    pub north_gap: String,
    pub south_gap: String,
    pub east_gap: String,
    pub west_gap: String,
    pub num_stages: u32,
    /// Vertical frame modules ("koma") consumed by the layout.
    pub modules_count: u32,
    /// Jack-up height after any tie-column reduction (mm).
    pub jack_up_height: i64,
    pub first_layer_height: i64,
    /// False when the tie-column reduction could not complete.
    pub tie_ok: bool,
    pub tie_column_used: bool,
}
