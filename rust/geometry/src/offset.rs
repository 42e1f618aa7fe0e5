// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outward edge offsetting and offset-polygon reconstruction.
//!
//! Each edge is pushed outward along its unit normal by its clearance;
//! the offset vertex for a corner is the intersection of the two adjacent
//! offset lines. Parallel neighbors fall back to the edge's own offset
//! start point instead of aborting the polygon.

use nalgebra::{Point2, Vector2};

use crate::error::{Error, Result};
use crate::polygon::{BuildingPolygon, BuildingVertex, LENGTH_EPS};

/// Offset lines whose directions cross below this are treated as
/// parallel. Directions are normalized, so this bounds the sine of the
/// angle between them.
const PARALLEL_EPS: f64 = 1e-3;

/// An infinite line in parametric form.
struct OffsetLine {
    origin: Point2<f64>,
    direction: Vector2<f64>,
}

/// Intersection point of two parameterized lines, or `None` when they
/// are parallel within tolerance. Directions should be normalized.
pub fn line_intersection(
    origin_a: Point2<f64>,
    direction_a: Vector2<f64>,
    origin_b: Point2<f64>,
    direction_b: Vector2<f64>,
) -> Option<Point2<f64>> {
    let denom = direction_a.perp(&direction_b);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let offset = origin_b - origin_a;
    let t = offset.perp(&direction_b) / denom;
    Some(origin_a + direction_a * t)
}

impl BuildingPolygon {
    /// Unit outward normal of edge `index`, or `None` for a zero-length
    /// edge. Outward is derived from the loop orientation, so both
    /// winding orders produce normals that point away from the interior.
    pub fn outward_normal(&self, index: usize) -> Option<Vector2<f64>> {
        let direction = self.edge_vector(index);
        let length = direction.norm();
        if length < LENGTH_EPS {
            return None;
        }
        let unit = direction / length;
        if self.is_counter_clockwise() {
            Some(Vector2::new(unit.y, -unit.x))
        } else {
            Some(Vector2::new(-unit.y, unit.x))
        }
    }

    /// Outward normal for every edge; a zero-length edge inherits the
    /// nearest preceding well-defined normal (wrapping).
    pub(crate) fn resolved_normals(&self) -> Result<Vec<Vector2<f64>>> {
        let n = self.edge_count();
        let raw: Vec<Option<Vector2<f64>>> = (0..n).map(|i| self.outward_normal(i)).collect();

        let mut resolved = Vec::with_capacity(n);
        for i in 0..n {
            let normal = (0..n).find_map(|back| raw[(i + n - back) % n]);
            resolved.push(normal.ok_or(Error::DegeneratePolygon)?);
        }
        Ok(resolved)
    }

    /// Edge direction consistent with an outward normal, for edges too
    /// short to carry their own direction.
    fn direction_from_normal(&self, normal: &Vector2<f64>) -> Vector2<f64> {
        if self.is_counter_clockwise() {
            Vector2::new(-normal.y, normal.x)
        } else {
            Vector2::new(normal.y, -normal.x)
        }
    }

    /// Offsets every edge outward by its clearance and re-intersects
    /// adjacent offset lines into a new vertex loop. The returned loop
    /// has one vertex per input vertex, in the same order. Negative
    /// clearances clamp to zero.
    pub fn offset_polygon(&self, clearances: &[f64]) -> Result<Vec<BuildingVertex>> {
        let n = self.edge_count();
        if clearances.len() != n {
            return Err(Error::ClearanceCountMismatch {
                expected: n,
                got: clearances.len(),
            });
        }
        let normals = self.resolved_normals()?;

        let lines: Vec<OffsetLine> = (0..n)
            .map(|i| {
                let clearance = clearances[i].max(0.0);
                let (start, _) = self.edge(i);
                let origin = start.point() + normals[i] * clearance;
                let direction = {
                    let v = self.edge_vector(i);
                    let length = v.norm();
                    if length < LENGTH_EPS {
                        self.direction_from_normal(&normals[i])
                    } else {
                        v / length
                    }
                };
                OffsetLine { origin, direction }
            })
            .collect();

        let mut vertices = Vec::with_capacity(n);
        for i in 0..n {
            let before = &lines[(i + n - 1) % n];
            let after = &lines[i];
            let corner = line_intersection(
                before.origin,
                before.direction,
                after.origin,
                after.direction,
            )
            .unwrap_or(after.origin);
            vertices.push(BuildingVertex::new(corner.x, corner.y));
        }
        Ok(vertices)
    }
}
