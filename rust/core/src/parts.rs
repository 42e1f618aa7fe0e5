// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part catalog and minimal-combination search.

use smallvec::{smallvec, SmallVec};

use crate::types::STANDARD_PART;

/// Standard frame part lengths, longest first (mm).
pub const PART_CATALOG: [i64; 5] = [1800, 1500, 1200, 900, 600];

/// Special part lengths available on explicit request (mm).
pub const SPECIAL_PARTS: [i64; 3] = [150, 300, 355];

/// Inline part list; a face rarely needs more than eight parts.
pub type PartList = SmallVec<[i64; 8]>;

/// Building width rounded down to the nearest standard-part multiple (mm).
pub fn base_width(width: i64) -> i64 {
    if width <= 0 {
        return 0;
    }
    width - width % STANDARD_PART
}

/// Finds the cheapest catalog combination covering `target`.
///
/// Enumerates multisets of 1..=`max_count` parts in ascending arity and keeps
/// the smallest sum ≥ `target`; equal sums prefer more 1800mm parts, and the
/// ascending arity scan makes fewer parts win ahead of that. Catalog steps
/// are multiples of 300, so no higher arity can beat a qualifying sum and the
/// search stops at the first arity that produces one. Returns an empty list
/// for `target <= 0`; when even `max_count` longest parts cannot reach the
/// target, falls back to exactly that, the largest reachable combination.
pub fn find_min_combination(target: i64, max_count: usize) -> PartList {
    if target <= 0 {
        return PartList::new();
    }
    let mut best: Option<LevelBest> = None;
    let mut scratch = PartList::new();
    for arity in 1..=max_count {
        search(target, arity, 0, 0, &mut scratch, &mut best);
        if best.is_some() {
            break;
        }
    }
    match best {
        Some(found) => found.parts,
        None => smallvec![STANDARD_PART; max_count],
    }
}

struct LevelBest {
    parts: PartList,
    sum: i64,
    standard_count: u32,
}

fn search(
    target: i64,
    slots: usize,
    start: usize,
    sum: i64,
    scratch: &mut PartList,
    best: &mut Option<LevelBest>,
) {
    if slots == 0 {
        if sum >= target {
            let standard_count = scratch.iter().filter(|&&p| p == STANDARD_PART).count() as u32;
            let replace = match best {
                None => true,
                Some(prev) => {
                    sum < prev.sum || (sum == prev.sum && standard_count > prev.standard_count)
                }
            };
            if replace {
                *best = Some(LevelBest {
                    parts: scratch.clone(),
                    sum,
                    standard_count,
                });
            }
        }
        return;
    }
    for idx in start..PART_CATALOG.len() {
        let part = PART_CATALOG[idx];
        // catalog is descending: once this part cannot fill the remaining
        // slots up to the target, no later one can either
        if sum + part * (slots as i64) < target {
            break;
        }
        scratch.push(part);
        search(target, slots - 1, idx, sum + part, scratch, best);
        scratch.pop();
    }
}

/// Renders a part list in storage form: 1800mm parts collapse into a
/// leading `"<n>span"`, the rest follow in descending order, comma-joined.
pub fn format_span_parts(parts: &[i64]) -> String {
    let standard_count = parts.iter().filter(|&&p| p == STANDARD_PART).count();
    let mut rest: Vec<i64> = parts
        .iter()
        .copied()
        .filter(|&p| p != STANDARD_PART)
        .collect();
    rest.sort_unstable_by(|a, b| b.cmp(a));

    let mut pieces: Vec<String> = Vec::with_capacity(rest.len() + 1);
    if standard_count > 0 {
        pieces.push(format!("{standard_count}span"));
    }
    pieces.extend(rest.iter().map(|p| p.to_string()));
    pieces.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_width_rounds_down() {
        assert_eq!(base_width(10000), 9000);
        assert_eq!(base_width(1800), 1800);
        assert_eq!(base_width(1799), 0);
        assert_eq!(base_width(0), 0);
    }

    #[test]
    fn combination_for_5000_is_5100() {
        let parts = find_min_combination(5000, 10);
        assert_eq!(parts.as_slice(), &[1800, 1800, 1500]);
        assert_eq!(parts.iter().sum::<i64>(), 5100);
    }

    #[test]
    fn combination_prefers_standard_parts_on_ties() {
        // 3600 is reachable as 1800+1800 and nothing shorter qualifies
        let parts = find_min_combination(3600, 10);
        assert_eq!(parts.as_slice(), &[1800, 1800]);
    }

    #[test]
    fn combination_minimal_overshoot() {
        // one part tops out at 1800, two parts reach 2100 at best
        let parts = find_min_combination(2000, 10);
        assert_eq!(parts.iter().sum::<i64>(), 2100);
        assert_eq!(parts.as_slice(), &[1500, 600]);
    }

    #[test]
    fn combination_single_part() {
        assert_eq!(find_min_combination(1800, 10).as_slice(), &[1800]);
        assert_eq!(find_min_combination(150, 10).as_slice(), &[600]);
    }

    #[test]
    fn combination_empty_for_non_positive_target() {
        assert!(find_min_combination(0, 10).is_empty());
        assert!(find_min_combination(-300, 10).is_empty());
    }

    #[test]
    fn combination_falls_back_when_unreachable() {
        let parts = find_min_combination(4000, 2);
        assert_eq!(parts.as_slice(), &[1800, 1800]);
    }

    #[test]
    fn combination_sum_covers_target() {
        for target in (300..9000).step_by(300) {
            let parts = find_min_combination(target, 10);
            assert!(parts.iter().sum::<i64>() >= target, "target {target}");
        }
    }

    #[test]
    fn span_text_collapses_standard_parts() {
        assert_eq!(format_span_parts(&[1800, 1800, 1500]), "2span, 1500");
        assert_eq!(format_span_parts(&[600, 1800, 300]), "1span, 600, 300");
        assert_eq!(format_span_parts(&[1500]), "1500");
        assert_eq!(format_span_parts(&[]), "");
    }
}
