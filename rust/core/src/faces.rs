// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-axis face dimensioning.
//!
//! Proposes candidate total spans around the targeted clearances, legs each
//! one through the combination search and the margin distributor, and keeps
//! the candidate whose margins land closest to the targets. Sides that still
//! end below their minimum clearance get a correction part annotated rather
//! than silently widened.

use tracing::{debug, trace};

use crate::margins::distribute_margins;
use crate::parts::{base_width, find_min_combination, format_span_parts, PartList, SPECIAL_PARTS};
use crate::types::{MarginNote, BOUNDARY_OFFSET, EAVES_CLEARANCE, STANDARD_PART};

/// Combination arity bound for the dimension path.
const SEARCH_DEPTH: usize = 10;
/// Candidate spans step 150mm out to ±900mm around the target span.
const SEARCH_STEP: i64 = 150;
const SEARCH_OFFSETS: i64 = 6;
/// Margins within this distance of their target count as met (mm).
const SCORE_TOLERANCE: i64 = 50;
/// Score weight applied when both margins meet their target.
const TOLERANCE_BONUS: f64 = 0.8;
/// Correction part options, smallest first: special then standard lengths.
const CORRECTION_CANDIDATES: [i64; 8] = [150, 300, 355, 600, 900, 1200, 1500, 1800];

/// Inputs for one building axis, left/right in face-local orientation.
#[derive(Debug, Clone, Copy)]
pub struct FaceInput {
    /// Building width along this axis (mm).
    pub width: i64,
    /// Eave overhang per side (mm).
    pub eaves_left: i64,
    pub eaves_right: i64,
    /// Distance to the site boundary per side, when one exists (mm).
    pub boundary_left: Option<i64>,
    pub boundary_right: Option<i64>,
    /// Requested clearance per side; `None` uses the minimum (mm).
    pub target_left: Option<i64>,
    pub target_right: Option<i64>,
    /// Mandatory special part counts for this axis.
    pub specials_150: u32,
    pub specials_300: u32,
    pub specials_355: u32,
}

/// Dimensioning outcome for one building axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceDimensions {
    /// Total scaffold span (mm).
    pub total_span: i64,
    /// Width rounded down to whole standard parts (mm).
    pub base: i64,
    /// Parts beyond the base, mandatory specials included, descending.
    pub parts: PartList,
    /// Clearance outcome per side.
    pub left: MarginNote,
    pub right: MarginNote,
}

impl FaceDimensions {
    /// Storage-form span composition with correction annotations embedded.
    ///
    /// A left-side correction prefixes the text and a right-side one
    /// annotates its end; when both sides need the same part it shows on
    /// both ends with the part appended once more.
    pub fn span_structure(&self) -> String {
        let standard_count = (self.base / STANDARD_PART).max(0) as usize;
        let mut combined: Vec<i64> = vec![STANDARD_PART; standard_count];
        combined.extend_from_slice(&self.parts);
        let text = format_span_parts(&combined);

        let correction = match (self.left.correction, self.right.correction) {
            (Some(left), Some(right)) => left.max(right),
            (Some(left), None) => left,
            (None, Some(right)) => right,
            (None, None) => return text,
        };
        let on_left = self.left.correction == Some(correction);
        let on_right = self.right.correction == Some(correction);
        match (on_left, on_right) {
            (true, true) if text.is_empty() => {
                format!("(+{correction}), {correction}(+{correction})")
            }
            (true, true) => format!("(+{correction}), {text}, {correction}(+{correction})"),
            (true, false) => format!("(+{correction}), {text}"),
            (false, true) if text.is_empty() => format!("{correction}(+{correction})"),
            (false, true) => format!("{text}(+{correction})"),
            (false, false) => text,
        }
    }
}

struct Pick {
    total_span: i64,
    combo: PartList,
    left: i64,
    right: i64,
}

/// Computes the scaffold dimensions for one building axis.
pub fn calculate_face(input: &FaceInput) -> FaceDimensions {
    let threshold_left = input.eaves_left + EAVES_CLEARANCE;
    let threshold_right = input.eaves_right + EAVES_CLEARANCE;
    let target_left = input.target_left.unwrap_or(threshold_left);
    let target_right = input.target_right.unwrap_or(threshold_right);

    let mandatory = mandatory_parts(input);
    let mandatory_sum: i64 = mandatory.iter().sum();
    let base = base_width(input.width);

    let min_span =
        input.width + 2 * (input.eaves_left.max(input.eaves_right) + EAVES_CLEARANCE);
    let cap_left = input.boundary_left.map(|b| (b - BOUNDARY_OFFSET).max(0));
    let cap_right = input.boundary_right.map(|b| (b - BOUNDARY_OFFSET).max(0));
    let max_span = match (cap_left, cap_right) {
        (Some(left), Some(right)) => Some(input.width + left + right),
        _ => None,
    };

    let mut best: Option<(f64, Pick)> = None;
    for candidate in span_candidates(input.width + target_left + target_right, min_span, max_span)
    {
        let combo = find_min_combination(candidate - base - mandatory_sum, SEARCH_DEPTH);
        let total_span = base + mandatory_sum + combo.iter().sum::<i64>();
        if max_span.map_or(false, |limit| total_span > limit) {
            continue;
        }
        let (left, right) = distribute_margins(
            total_span,
            input.width,
            input.boundary_left,
            input.boundary_right,
            target_left,
            target_right,
        );
        let diff_left = (left - target_left).abs();
        let diff_right = (right - target_right).abs();
        let mut score = (diff_left + diff_right) as f64;
        if diff_left <= SCORE_TOLERANCE && diff_right <= SCORE_TOLERANCE {
            score *= TOLERANCE_BONUS;
        }
        trace!(candidate, total_span, score, "span candidate scored");
        if best.as_ref().map_or(true, |(prev, _)| score < *prev) {
            best = Some((
                score,
                Pick {
                    total_span,
                    combo,
                    left,
                    right,
                },
            ));
        }
    }

    let pick = match best {
        Some((_, pick)) => pick,
        None => {
            // boundaries leave no candidate standing: cover the minimum if
            // the caps allow it, else fall back to the bare base span
            let required = (min_span - base - mandatory_sum).max(0);
            let mut combo = find_min_combination(required, SEARCH_DEPTH);
            let mut total_span = base + mandatory_sum + combo.iter().sum::<i64>();
            if max_span.map_or(false, |limit| total_span > limit) {
                combo = PartList::new();
                total_span = base + mandatory_sum;
            }
            let (left, right) = distribute_margins(
                total_span,
                input.width,
                input.boundary_left,
                input.boundary_right,
                target_left,
                target_right,
            );
            Pick {
                total_span,
                combo,
                left,
                right,
            }
        }
    };

    let left = side_note(pick.left, threshold_left);
    let right = side_note(pick.right, threshold_right);

    let mut parts = mandatory;
    parts.extend(pick.combo);
    parts.sort_unstable_by(|a, b| b.cmp(a));

    debug!(
        width = input.width,
        total_span = pick.total_span,
        margin_left = pick.left,
        margin_right = pick.right,
        "face dimensions settled"
    );

    FaceDimensions {
        total_span: pick.total_span,
        base,
        parts,
        left,
        right,
    }
}

fn mandatory_parts(input: &FaceInput) -> PartList {
    let counts = [input.specials_150, input.specials_300, input.specials_355];
    let mut parts = PartList::new();
    for (&part, count) in SPECIAL_PARTS.iter().zip(counts) {
        for _ in 0..count {
            parts.push(part);
        }
    }
    parts
}

fn span_candidates(center: i64, min_span: i64, max_span: Option<i64>) -> Vec<i64> {
    if max_span.map_or(false, |limit| limit < min_span) {
        return Vec::new();
    }
    let mut candidates: Vec<i64> = (-SEARCH_OFFSETS..=SEARCH_OFFSETS)
        .map(|step| {
            let mut span = (center + step * SEARCH_STEP).max(min_span);
            if let Some(limit) = max_span {
                span = span.min(limit);
            }
            span
        })
        .collect();
    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

fn side_note(margin: i64, threshold: i64) -> MarginNote {
    if margin >= threshold {
        return MarginNote::plain(margin);
    }
    let correction = CORRECTION_CANDIDATES
        .iter()
        .copied()
        .find(|part| margin + part >= threshold)
        .unwrap_or(STANDARD_PART);
    MarginNote {
        margin,
        correction: Some(correction),
    }
}
