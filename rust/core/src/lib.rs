// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Ashiba Core
//!
//! Scaffold layout calculation engine: part combinations, clearance
//! margins, face dimensions, and vertical stage planning for modular frame
//! scaffolds.
//!
//! ## Overview
//!
//! A calculation takes one [`ScaffoldInput`] (building widths, eave
//! overhangs, optional site boundaries, optional target clearances, height
//! and roof data) and produces one immutable [`ScaffoldCalculationResult`]
//! whose fields serialize one-for-one into the storage schema. Everything
//! is pure, synchronous arithmetic over integer millimeters: no shared
//! state, no I/O, no panics on legal input.
//!
//! The pipeline is leaf-first:
//!
//! - [`parts`]: the part catalog and the minimal-combination search
//! - [`margins`]: splitting a span's surplus into two side margins
//! - [`faces`]: per-axis candidate search, scoring, and corrections
//! - [`stages`]: stage count, first layer, jack-up, tie reduction
//! - [`engine`]: orchestration and result assembly
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ashiba_core::{calculate_checked, ScaffoldInput};
//!
//! let input: ScaffoldInput = serde_json::from_str(payload)?;
//! let result = calculate_checked(&input)?;
//! println!("{} | {}", result.ns_span_structure, result.ew_span_structure);
//! ```
//!
//! Margin shortfalls never fail a calculation: a side that cannot reach its
//! minimum clearance carries a correction-part annotation in its note and
//! in the span structure instead.

pub mod engine;
pub mod error;
pub mod faces;
pub mod margins;
pub mod parts;
pub mod stages;
pub mod types;
pub mod validation;

// Entry points
pub use engine::{calculate, calculate_checked};
pub use error::{Error, Result};

// Data model
pub use types::{MarginNote, RoofShape, ScaffoldCalculationResult, ScaffoldInput};

// Dimension constants (mm)
pub use types::{BOUNDARY_OFFSET, EAVES_CLEARANCE, FIRST_LAYER_MIN, STAGE_UNIT, STANDARD_PART};

// Calculation pieces
pub use faces::{calculate_face, FaceDimensions, FaceInput};
pub use margins::distribute_margins;
pub use parts::{base_width, find_min_combination, format_span_parts, PartList, PART_CATALOG};
pub use stages::{plan_stages, StagePlan};
pub use validation::{normalize, validate, ValidationIssue, ValidationReport};
