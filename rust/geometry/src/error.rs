// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the polygon subsystem.
//!
//! Only structurally unusable input errors out; per-edge degeneracies
//! (zero-length edges, parallel offset lines) degrade to fallbacks inside
//! the operations instead.

/// Result type alias for polygon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a scaffold line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A footprint needs at least three vertices to enclose anything.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The per-edge clearance list must match the edge count.
    #[error("clearance count mismatch: expected {expected}, got {got}")]
    ClearanceCountMismatch { expected: usize, got: usize },

    /// A clearance override referenced an edge the polygon does not have.
    #[error("edge index {index} out of range for {edges} edges")]
    EdgeIndexOutOfRange { index: usize, edges: usize },

    /// Two clearance overrides targeted the same edge.
    #[error("duplicate clearance override for edge {0}")]
    DuplicateClearance(usize),

    /// Every edge of the polygon has zero length.
    #[error("polygon is degenerate: all edges have zero length")]
    DegeneratePolygon,
}
