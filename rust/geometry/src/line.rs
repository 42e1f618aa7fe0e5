// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scaffold-line assembly over an offset footprint.
//!
//! Combines the offset polygon with the part-combination search: each
//! offset edge gets a part list covering its length, span markers at the
//! true part boundaries, and a span text in the drawing dialect
//! (`"3span + 900mm"`). Inside-corner allocation splits one face's part
//! list across the two edges meeting at a concave vertex.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use ashiba_core::{find_min_combination, PartList, STANDARD_PART};

use crate::error::{Error, Result};
use crate::polygon::{BuildingPolygon, BuildingVertex, FaceDirection};

/// Combination search depth for covering an offset edge.
const EDGE_SEARCH_DEPTH: usize = 10;

/// Combination search depth for topping up after an inside-corner split.
const CORNER_TOPUP_DEPTH: usize = 5;

/// Clearance override for a single edge, taking precedence over the
/// per-face default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeClearance {
    pub edge_index: usize,
    pub clearance: f64,
}

/// Default clearance per compass face (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceClearances {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

impl FaceClearances {
    pub fn uniform(clearance: f64) -> Self {
        Self {
            north: clearance,
            east: clearance,
            south: clearance,
            west: clearance,
        }
    }

    pub fn get(&self, face: FaceDirection) -> f64 {
        match face {
            FaceDirection::North => self.north,
            FaceDirection::East => self.east,
            FaceDirection::South => self.south,
            FaceDirection::West => self.west,
        }
    }
}

/// Axis-aligned bounds a scaffold line must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ScaffoldBounds {
    /// Tight bounds around a vertex set, `None` when it is empty.
    pub fn from_vertices(vertices: &[BuildingVertex]) -> Option<Self> {
        let first = vertices.first()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for vertex in &vertices[1..] {
            bounds.min_x = bounds.min_x.min(vertex.x);
            bounds.min_y = bounds.min_y.min(vertex.y);
            bounds.max_x = bounds.max_x.max(vertex.x);
            bounds.max_y = bounds.max_y.max(vertex.y);
        }
        Some(bounds)
    }

    pub fn contains(&self, vertex: &BuildingVertex) -> bool {
        vertex.x >= self.min_x
            && vertex.x <= self.max_x
            && vertex.y >= self.min_y
            && vertex.y <= self.max_y
    }
}

/// One edge of the generated scaffold line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldEdge {
    pub edge_index: usize,
    pub start: BuildingVertex,
    pub end: BuildingVertex,
    /// Compass face of the building edge this scaffold edge runs along.
    pub face: FaceDirection,
    /// Clearance used for the offset (mm, clamped non-negative).
    pub clearance: f64,
    /// Geometric length of the offset edge (mm).
    pub length: f64,
    /// Parts covering the edge, largest first.
    pub parts: Vec<i64>,
    /// Interior part-boundary positions as 0..1 ratios along the edge.
    pub markers: Vec<f64>,
    /// Part composition in the drawing dialect.
    pub span_text: String,
}

/// A complete scaffold line around a footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldLineResult {
    pub vertices: Vec<BuildingVertex>,
    pub edges: Vec<ScaffoldEdge>,
    /// Indices of offset vertices falling outside the supplied bounds.
    pub out_of_bounds: Vec<usize>,
}

/// Resolves one clearance per edge from per-face defaults plus explicit
/// per-edge overrides.
pub fn resolve_clearances(
    polygon: &BuildingPolygon,
    faces: &FaceClearances,
    overrides: &[EdgeClearance],
) -> Result<Vec<f64>> {
    let directions = polygon.face_directions()?;
    let mut clearances: Vec<f64> = directions.iter().map(|&face| faces.get(face)).collect();

    let mut overridden = vec![false; clearances.len()];
    for entry in overrides {
        if entry.edge_index >= clearances.len() {
            return Err(Error::EdgeIndexOutOfRange {
                index: entry.edge_index,
                edges: clearances.len(),
            });
        }
        if overridden[entry.edge_index] {
            return Err(Error::DuplicateClearance(entry.edge_index));
        }
        overridden[entry.edge_index] = true;
        clearances[entry.edge_index] = entry.clearance;
    }
    Ok(clearances)
}

/// Generates the scaffold line for a footprint: offsets the polygon by
/// the per-edge clearances, covers each offset edge with parts, and
/// optionally reports offset vertices escaping the given bounds.
pub fn scaffold_line(
    polygon: &BuildingPolygon,
    clearances: &[f64],
    bounds: Option<&ScaffoldBounds>,
) -> Result<ScaffoldLineResult> {
    let vertices = polygon.offset_polygon(clearances)?;
    let faces = polygon.face_directions()?;

    let n = vertices.len();
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let start = vertices[i];
        let end = vertices[(i + 1) % n];
        let length = start.distance_to(&end);
        let parts = find_min_combination(length.ceil() as i64, EDGE_SEARCH_DEPTH);

        let total: i64 = parts.iter().sum();
        let mut markers = Vec::new();
        if total > 0 {
            let mut covered = 0;
            for &part in parts.iter().take(parts.len().saturating_sub(1)) {
                covered += part;
                markers.push(covered as f64 / total as f64);
            }
        }

        edges.push(ScaffoldEdge {
            edge_index: i,
            start,
            end,
            face: faces[i],
            clearance: clearances[i].max(0.0),
            length,
            span_text: format_drawing_span(&parts),
            parts: parts.into_vec(),
            markers,
        });
    }

    let out_of_bounds = match bounds {
        Some(bounds) => vertices
            .iter()
            .enumerate()
            .filter(|(_, vertex)| !bounds.contains(vertex))
            .map(|(i, _)| i)
            .collect(),
        None => Vec::new(),
    };

    Ok(ScaffoldLineResult {
        vertices,
        edges,
        out_of_bounds,
    })
}

/// Splits a face's part list across the two edges meeting at an inside
/// corner. The first edge keeps the minimal largest-first prefix
/// covering its length plus the shared corner clearance; the second
/// keeps the rest, topped up from the catalog when the remainder cannot
/// cover its own length plus the clearance.
pub fn split_at_inside_corner(
    parts: &[i64],
    first_len: f64,
    second_len: f64,
    corner_clearance: f64,
) -> (PartList, PartList) {
    let clearance = corner_clearance.max(0.0);
    let first_need = (first_len + clearance).ceil() as i64;
    let second_need = (second_len + clearance).ceil() as i64;

    let mut pool: PartList = parts.iter().copied().collect();
    pool.sort_unstable_by(|a, b| b.cmp(a));

    let mut first: PartList = smallvec![];
    let mut covered = 0_i64;
    let mut rest_start = pool.len();
    for (i, &part) in pool.iter().enumerate() {
        if covered >= first_need {
            rest_start = i;
            break;
        }
        first.push(part);
        covered += part;
    }

    let mut second: PartList = pool[rest_start..].iter().copied().collect();
    let have: i64 = second.iter().sum();
    if have < second_need {
        second.extend(find_min_combination(second_need - have, CORNER_TOPUP_DEPTH));
        second.sort_unstable_by(|a, b| b.cmp(a));
    }
    (first, second)
}

/// Formats a part list in the drawing dialect: 1800mm parts collapse to
/// `"<N>span"`, the rest follow in descending order with an `mm`
/// suffix, all joined by `" + "`.
pub fn format_drawing_span(parts: &[i64]) -> String {
    let standard = parts.iter().filter(|&&p| p == STANDARD_PART).count();
    let mut rest: Vec<i64> = parts
        .iter()
        .copied()
        .filter(|&p| p != STANDARD_PART)
        .collect();
    rest.sort_unstable_by(|a, b| b.cmp(a));

    let mut pieces = Vec::new();
    if standard > 0 {
        pieces.push(format!("{standard}span"));
    }
    pieces.extend(rest.iter().map(|p| format!("{p}mm")));
    pieces.join(" + ")
}

/// Parses drawing-dialect span text back into a part list. Returns
/// `None` for tokens in neither `<N>span` nor `<len>mm` form.
pub fn parse_drawing_span(text: &str) -> Option<Vec<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    let mut parts = Vec::new();
    for token in trimmed.split('+') {
        let token = token.trim();
        if let Some(count) = token.strip_suffix("span") {
            let count: usize = count.trim().parse().ok()?;
            parts.extend(std::iter::repeat(STANDARD_PART).take(count));
        } else if let Some(length) = token.strip_suffix("mm") {
            parts.push(length.trim().parse().ok()?);
        } else {
            return None;
        }
    }
    Some(parts)
}

/// Marker positions for drawing a part list along an edge, endpoints
/// included: 0, the interior cumulative ratios, then 1. An empty or
/// zero-sum list yields just the endpoints.
pub fn marker_positions(parts: &[i64]) -> Vec<f64> {
    let total: i64 = parts.iter().sum();
    if total <= 0 {
        return vec![0.0, 1.0];
    }

    let mut positions = Vec::with_capacity(parts.len() + 1);
    positions.push(0.0);
    let mut covered = 0_i64;
    for (i, &part) in parts.iter().enumerate() {
        covered += part;
        if i == parts.len() - 1 {
            positions.push(1.0);
        } else {
            positions.push(covered as f64 / total as f64);
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn drawing_span_formats_standard_parts_first() {
        assert_eq!(
            format_drawing_span(&[1800, 1800, 1800, 1200, 150]),
            "3span + 1200mm + 150mm"
        );
        assert_eq!(format_drawing_span(&[1800]), "1span");
        assert_eq!(format_drawing_span(&[600, 900]), "900mm + 600mm");
        assert_eq!(format_drawing_span(&[]), "");
    }

    #[test]
    fn drawing_span_parses_back() {
        assert_eq!(
            parse_drawing_span("3span + 1200mm + 150mm"),
            Some(vec![1800, 1800, 1800, 1200, 150])
        );
        assert_eq!(parse_drawing_span(" 2span + 600mm "), Some(vec![1800, 1800, 600]));
        assert_eq!(parse_drawing_span(""), Some(Vec::new()));
        assert_eq!(parse_drawing_span("5 meters"), None);
    }

    #[test]
    fn marker_positions_include_endpoints() {
        let positions = marker_positions(&[1800, 1800, 900]);
        assert_eq!(positions.len(), 4);
        assert_relative_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[1], 0.4);
        assert_relative_eq!(positions[2], 0.8);
        assert_relative_eq!(positions[3], 1.0);

        assert_eq!(marker_positions(&[]), vec![0.0, 1.0]);
    }

    #[test]
    fn corner_split_keeps_a_minimal_prefix() {
        let (first, second) = split_at_inside_corner(&[1800, 1800, 1200], 1700.0, 1500.0, 100.0);
        assert_eq!(first.as_slice(), &[1800]);
        assert_eq!(second.as_slice(), &[1800, 1200]);
    }

    #[test]
    fn corner_split_tops_up_the_second_edge() {
        let (first, second) =
            split_at_inside_corner(&[1800, 1800, 1800, 1200, 600], 3500.0, 3100.0, 150.0);
        assert_eq!(first.as_slice(), &[1800, 1800, 1800]);
        // remainder 1800 < 3250 needed; 1500 is the smallest single top-up
        assert_eq!(second.as_slice(), &[1500, 1200, 600]);
    }

    #[test]
    fn corner_split_survives_an_exhausted_pool() {
        let (first, second) = split_at_inside_corner(&[900], 1800.0, 900.0, 0.0);
        assert_eq!(first.as_slice(), &[900]);
        assert_eq!(second.as_slice(), &[900]);
    }

    #[test]
    fn bounds_from_vertices() {
        let bounds = ScaffoldBounds::from_vertices(&[
            BuildingVertex::new(-150.0, -150.0),
            BuildingVertex::new(6150.0, 4150.0),
            BuildingVertex::new(0.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(bounds.min_x, -150.0);
        assert_relative_eq!(bounds.max_y, 4150.0);
        assert!(bounds.contains(&BuildingVertex::new(0.0, 0.0)));
        assert!(!bounds.contains(&BuildingVertex::new(-151.0, 0.0)));
        assert!(ScaffoldBounds::from_vertices(&[]).is_none());
    }
}
