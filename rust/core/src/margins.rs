// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Margin distribution between the building and the scaffold line.

use tracing::debug;

use crate::types::BOUNDARY_OFFSET;

/// Splits a span's surplus over the building width into two side margins.
///
/// The surplus is first divided in proportion to the per-side targets: when
/// it cannot cover both targets each side gets its proportional share, and
/// when it exceeds them both targets are granted and the remainder is split
/// in the same proportion. A present site boundary caps its side at
/// `boundary - 60mm`; clipped amounts move to the opposite side and a final
/// re-clip keeps both sides within their caps. The two margins sum to the
/// surplus unless both caps bind.
pub fn distribute_margins(
    total_span: i64,
    width: i64,
    boundary_left: Option<i64>,
    boundary_right: Option<i64>,
    target_left: i64,
    target_right: i64,
) -> (i64, i64) {
    let available = (total_span - width).max(0);

    let total_target = target_left + target_right;
    let (left, right) = if total_target <= 0 {
        (available / 2, available - available / 2)
    } else if available <= total_target {
        let left = available * target_left / total_target;
        (left, available - left)
    } else {
        let surplus = available - total_target;
        let extra_left = surplus * target_left / total_target;
        (target_left + extra_left, target_right + surplus - extra_left)
    };

    let cap_left = boundary_left.map(|b| (b - BOUNDARY_OFFSET).max(0));
    let cap_right = boundary_right.map(|b| (b - BOUNDARY_OFFSET).max(0));
    if cap_left.is_none() && cap_right.is_none() {
        debug!(available, left, right, "margins distributed");
        return (left, right);
    }

    let clip = |value: i64, cap: Option<i64>| cap.map_or(value, |c| value.min(c));
    let clipped_left = clip(left, cap_left);
    let clipped_right = clip(right, cap_right);
    let loss_left = left - clipped_left;
    let loss_right = right - clipped_right;
    let left = clip(clipped_left + loss_right, cap_left);
    let right = clip(clipped_right + loss_left, cap_right);

    debug!(available, left, right, "margins distributed within boundaries");
    (left, right)
}
