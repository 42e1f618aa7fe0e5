// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building footprint polygons: orientation, corner classification, and
//! compass faces.
//!
//! The drawing plane follows the canvas convention: y grows downward, so
//! north is -y and south is +y. Both winding orders are accepted; outward
//! direction is derived from the signed area, never assumed.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Corners within this many degrees of 180° count as straight.
const STRAIGHT_TOLERANCE_DEG: f64 = 5.0;

/// Edges shorter than this are treated as zero-length.
pub(crate) const LENGTH_EPS: f64 = 1e-9;

/// A footprint vertex in drawing-plane millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingVertex {
    pub x: f64,
    pub y: f64,
}

impl BuildingVertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance to another vertex.
    pub fn distance_to(&self, other: &BuildingVertex) -> f64 {
        (other.point() - self.point()).norm()
    }
}

/// Classification of a footprint vertex by its interior angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerKind {
    /// Interior angle below 180° (outside corner).
    Convex,
    /// Interior angle within tolerance of 180°.
    Straight,
    /// Interior angle above 180° (inside corner).
    Concave,
}

/// Compass face an edge belongs to, from its outward normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceDirection {
    North,
    East,
    South,
    West,
}

impl FaceDirection {
    /// Classifies a unit outward normal into one of the four compass
    /// sectors. |x|-dominant normals go east/west; ties go to the
    /// vertical pair.
    pub fn from_normal(normal: &Vector2<f64>) -> FaceDirection {
        if normal.x.abs() > normal.y.abs() {
            if normal.x > 0.0 {
                FaceDirection::East
            } else {
                FaceDirection::West
            }
        } else if normal.y < 0.0 {
            FaceDirection::North
        } else {
            FaceDirection::South
        }
    }
}

/// A closed building footprint. The vertex loop is implicitly closed:
/// edge `i` runs from vertex `i` to vertex `i + 1` (wrapping), so the
/// edge count equals the vertex count. Edge and vertex indices wrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingPolygon {
    vertices: Vec<BuildingVertex>,
}

impl BuildingPolygon {
    /// Builds a polygon from an ordered vertex loop.
    pub fn new(vertices: Vec<BuildingVertex>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[BuildingVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> BuildingVertex {
        self.vertices[index % self.vertices.len()]
    }

    /// Endpoints of edge `index`.
    pub fn edge(&self, index: usize) -> (BuildingVertex, BuildingVertex) {
        let n = self.vertices.len();
        (self.vertices[index % n], self.vertices[(index + 1) % n])
    }

    pub fn edge_vector(&self, index: usize) -> Vector2<f64> {
        let (start, end) = self.edge(index);
        end.point() - start.point()
    }

    pub fn edge_length(&self, index: usize) -> f64 {
        self.edge_vector(index).norm()
    }

    pub fn perimeter(&self) -> f64 {
        (0..self.edge_count()).map(|i| self.edge_length(i)).sum()
    }

    /// Signed shoelace area. Positive means the loop runs
    /// counter-clockwise in coordinate terms (clockwise as drawn on the
    /// y-down canvas).
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let curr = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            sum += curr.x * next.y - next.x * curr.y;
        }
        sum / 2.0
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() >= 0.0
    }

    /// Interior angle at a vertex, in degrees in (0°, 360°).
    ///
    /// Computed from the turn between the incoming and outgoing edge
    /// vectors, corrected by the loop orientation so concave corners
    /// read above 180° for either winding. A zero-length neighboring
    /// edge yields 180° (the vertex is not a real corner).
    pub fn interior_angle(&self, index: usize) -> f64 {
        let n = self.vertices.len();
        let prev = self.vertices[(index + n - 1) % n];
        let curr = self.vertices[index % n];
        let next = self.vertices[(index + 1) % n];

        let incoming = curr.point() - prev.point();
        let outgoing = next.point() - curr.point();
        if incoming.norm() < LENGTH_EPS || outgoing.norm() < LENGTH_EPS {
            return 180.0;
        }

        let turn = incoming.perp(&outgoing).atan2(incoming.dot(&outgoing));
        if self.is_counter_clockwise() {
            180.0 - turn.to_degrees()
        } else {
            180.0 + turn.to_degrees()
        }
    }

    /// Classifies the corner at a vertex (±5° straight tolerance).
    pub fn classify_corner(&self, index: usize) -> CornerKind {
        let interior = self.interior_angle(index);
        if (interior - 180.0).abs() <= STRAIGHT_TOLERANCE_DEG {
            CornerKind::Straight
        } else if interior > 180.0 {
            CornerKind::Concave
        } else {
            CornerKind::Convex
        }
    }

    pub fn corner_kinds(&self) -> Vec<CornerKind> {
        (0..self.vertex_count())
            .map(|i| self.classify_corner(i))
            .collect()
    }

    /// Indices of concave (inside-corner) vertices.
    pub fn inside_corners(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&i| self.classify_corner(i) == CornerKind::Concave)
            .collect()
    }

    /// Compass face of one edge; `None` for a zero-length edge.
    pub fn face_direction(&self, index: usize) -> Option<FaceDirection> {
        self.outward_normal(index)
            .map(|n| FaceDirection::from_normal(&n))
    }

    /// Compass face of every edge, with zero-length edges inheriting the
    /// preceding well-defined edge's normal.
    pub fn face_directions(&self) -> Result<Vec<FaceDirection>> {
        let normals = self.resolved_normals()?;
        Ok(normals
            .iter()
            .map(FaceDirection::from_normal)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> BuildingPolygon {
        BuildingPolygon::new(vec![
            BuildingVertex::new(0.0, 0.0),
            BuildingVertex::new(6000.0, 0.0),
            BuildingVertex::new(6000.0, 4000.0),
            BuildingVertex::new(0.0, 4000.0),
        ])
        .unwrap()
    }

    fn square_reversed() -> BuildingPolygon {
        BuildingPolygon::new(vec![
            BuildingVertex::new(0.0, 0.0),
            BuildingVertex::new(0.0, 4000.0),
            BuildingVertex::new(6000.0, 4000.0),
            BuildingVertex::new(6000.0, 0.0),
        ])
        .unwrap()
    }

    fn l_shape() -> BuildingPolygon {
        BuildingPolygon::new(vec![
            BuildingVertex::new(0.0, 0.0),
            BuildingVertex::new(5000.0, 0.0),
            BuildingVertex::new(5000.0, 2000.0),
            BuildingVertex::new(8000.0, 2000.0),
            BuildingVertex::new(8000.0, 6000.0),
            BuildingVertex::new(0.0, 6000.0),
        ])
        .unwrap()
    }

    #[test]
    fn too_few_vertices_rejected() {
        let result = BuildingPolygon::new(vec![
            BuildingVertex::new(0.0, 0.0),
            BuildingVertex::new(1000.0, 0.0),
        ]);
        assert!(matches!(result, Err(Error::TooFewVertices(2))));
    }

    #[test]
    fn signed_area_tracks_winding() {
        assert_relative_eq!(square().signed_area(), 24_000_000.0);
        assert_relative_eq!(square_reversed().signed_area(), -24_000_000.0);
        assert!(square().is_counter_clockwise());
        assert!(!square_reversed().is_counter_clockwise());
    }

    #[test]
    fn square_interior_angles_are_right() {
        for polygon in [square(), square_reversed()] {
            for i in 0..4 {
                assert_relative_eq!(polygon.interior_angle(i), 90.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn l_shape_has_one_inside_corner() {
        let polygon = l_shape();
        assert_relative_eq!(polygon.interior_angle(2), 270.0, epsilon = 1e-10);
        assert_eq!(polygon.inside_corners(), vec![2]);
        assert_eq!(
            polygon.corner_kinds(),
            vec![
                CornerKind::Convex,
                CornerKind::Convex,
                CornerKind::Concave,
                CornerKind::Convex,
                CornerKind::Convex,
                CornerKind::Convex,
            ]
        );
    }

    #[test]
    fn nearly_flat_vertex_counts_as_straight() {
        // vertex 1 turns by atan2(100, 3000) ≈ 1.9°
        let polygon = BuildingPolygon::new(vec![
            BuildingVertex::new(0.0, 0.0),
            BuildingVertex::new(3000.0, 0.0),
            BuildingVertex::new(6000.0, 100.0),
            BuildingVertex::new(6000.0, 4000.0),
            BuildingVertex::new(0.0, 4000.0),
        ])
        .unwrap();
        assert_eq!(polygon.classify_corner(1), CornerKind::Straight);
        assert_eq!(polygon.classify_corner(3), CornerKind::Convex);
    }

    #[test]
    fn duplicate_vertex_reads_as_straight() {
        let polygon = BuildingPolygon::new(vec![
            BuildingVertex::new(0.0, 0.0),
            BuildingVertex::new(6000.0, 0.0),
            BuildingVertex::new(6000.0, 0.0),
            BuildingVertex::new(6000.0, 4000.0),
            BuildingVertex::new(0.0, 4000.0),
        ])
        .unwrap();
        assert_eq!(polygon.classify_corner(1), CornerKind::Straight);
        assert_eq!(polygon.classify_corner(2), CornerKind::Straight);
    }

    #[test]
    fn faces_are_winding_independent() {
        let forward: Vec<_> = (0..4).map(|i| square().face_direction(i).unwrap()).collect();
        assert_eq!(
            forward,
            vec![
                FaceDirection::North,
                FaceDirection::East,
                FaceDirection::South,
                FaceDirection::West,
            ]
        );

        // same rectangle listed the other way round: each geometric side
        // keeps its compass label
        let reversed: Vec<_> = (0..4)
            .map(|i| square_reversed().face_direction(i).unwrap())
            .collect();
        assert_eq!(
            reversed,
            vec![
                FaceDirection::West,
                FaceDirection::South,
                FaceDirection::East,
                FaceDirection::North,
            ]
        );
    }

    #[test]
    fn edge_metrics() {
        let polygon = square();
        assert_relative_eq!(polygon.edge_length(0), 6000.0);
        assert_relative_eq!(polygon.edge_length(1), 4000.0);
        assert_relative_eq!(polygon.perimeter(), 20_000.0);
        // indices wrap
        assert_eq!(polygon.edge(4), polygon.edge(0));
    }
}
