// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input validation and normalization.
//!
//! Validation collects every out-of-range field instead of stopping at the
//! first, so a caller can surface the whole report at once. Normalization
//! clamps stray negatives and the railing count without touching "none"
//! values.

use std::fmt;

use crate::types::ScaffoldInput;

const MAX_WIDTH: i64 = 50000;
const MAX_EAVES: i64 = 5000;
const MAX_BOUNDARY: i64 = 20000;
const MIN_HEIGHT: i64 = 1000;
const MAX_HEIGHT: i64 = 30000;
const MAX_TARGET: i64 = 5000;
const MAX_SPECIALS_EACH: u32 = 10;
const MAX_SPECIALS_PER_AXIS: u32 = 8;
const MAX_RAILINGS: u32 = 4;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Storage-schema field name.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every issue found in one input record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Checks every field of `input` against the storage-schema ranges.
pub fn validate(input: &ScaffoldInput) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (field, value) in [("width_NS", input.width_ns), ("width_EW", input.width_ew)] {
        if value <= 0 || value > MAX_WIDTH {
            report.push(field, format!("must be between 1 and {MAX_WIDTH} mm"));
        }
    }

    for (field, value) in [
        ("eaves_N", input.eaves_n),
        ("eaves_E", input.eaves_e),
        ("eaves_S", input.eaves_s),
        ("eaves_W", input.eaves_w),
    ] {
        if !(0..=MAX_EAVES).contains(&value) {
            report.push(field, format!("must be between 0 and {MAX_EAVES} mm"));
        }
    }

    for (field, value) in [
        ("boundary_N", input.boundary_n),
        ("boundary_E", input.boundary_e),
        ("boundary_S", input.boundary_s),
        ("boundary_W", input.boundary_w),
    ] {
        if let Some(distance) = value {
            if !(0..=MAX_BOUNDARY).contains(&distance) {
                report.push(field, format!("must be between 0 and {MAX_BOUNDARY} mm"));
            }
        }
    }

    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&input.standard_height) {
        report.push(
            "standard_height",
            format!("must be between {MIN_HEIGHT} and {MAX_HEIGHT} mm"),
        );
    }

    if input.railing_count > MAX_RAILINGS {
        report.push("railing_count", format!("must be between 0 and {MAX_RAILINGS}"));
    }

    for (field, count) in [
        ("use_355_NS", input.use_355_ns),
        ("use_300_NS", input.use_300_ns),
        ("use_150_NS", input.use_150_ns),
        ("use_355_EW", input.use_355_ew),
        ("use_300_EW", input.use_300_ew),
        ("use_150_EW", input.use_150_ew),
    ] {
        if count > MAX_SPECIALS_EACH {
            report.push(field, format!("at most {MAX_SPECIALS_EACH} parts"));
        }
    }
    let ns_specials = input.use_355_ns + input.use_300_ns + input.use_150_ns;
    let ew_specials = input.use_355_ew + input.use_300_ew + input.use_150_ew;
    for (field, total) in [("specials_NS", ns_specials), ("specials_EW", ew_specials)] {
        if total > MAX_SPECIALS_PER_AXIS {
            report.push(
                field,
                format!("at most {MAX_SPECIALS_PER_AXIS} special parts per axis"),
            );
        }
    }

    for (field, value) in [
        ("target_margin_N", input.target_margin_n),
        ("target_margin_E", input.target_margin_e),
        ("target_margin_S", input.target_margin_s),
        ("target_margin_W", input.target_margin_w),
    ] {
        if let Some(target) = value {
            if !(0..=MAX_TARGET).contains(&target) {
                report.push(field, format!("must be between 0 and {MAX_TARGET} mm"));
            }
        }
    }

    report
}

/// Clamps stray values into representable range, preserving "none" fields.
pub fn normalize(input: &ScaffoldInput) -> ScaffoldInput {
    ScaffoldInput {
        width_ns: input.width_ns.max(0),
        width_ew: input.width_ew.max(0),
        eaves_n: input.eaves_n.max(0),
        eaves_e: input.eaves_e.max(0),
        eaves_s: input.eaves_s.max(0),
        eaves_w: input.eaves_w.max(0),
        boundary_n: input.boundary_n.map(|v| v.max(0)),
        boundary_e: input.boundary_e.map(|v| v.max(0)),
        boundary_s: input.boundary_s.map(|v| v.max(0)),
        boundary_w: input.boundary_w.map(|v| v.max(0)),
        standard_height: input.standard_height.max(0),
        roof_shape: input.roof_shape,
        tie_column: input.tie_column,
        railing_count: input.railing_count.min(MAX_RAILINGS),
        use_355_ns: input.use_355_ns,
        use_300_ns: input.use_300_ns,
        use_150_ns: input.use_150_ns,
        use_355_ew: input.use_355_ew,
        use_300_ew: input.use_300_ew,
        use_150_ew: input.use_150_ew,
        target_margin_n: input.target_margin_n.map(|v| v.max(0)),
        target_margin_e: input.target_margin_e.map(|v| v.max(0)),
        target_margin_s: input.target_margin_s.map(|v| v.max(0)),
        target_margin_w: input.target_margin_w.map(|v| v.max(0)),
    }
}
