// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for scaffold calculations.

use crate::validation::ValidationReport;

/// Result alias for checked calculation entry points.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the checked calculation entry points.
///
/// The calculation itself is total: margin shortfalls become correction
/// annotations and an infeasible tie reduction becomes a result flag, so the
/// only hard failure is input that never reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input failed validation; every offending field is listed.
    #[error("invalid input: {0}")]
    InvalidInput(ValidationReport),
}
