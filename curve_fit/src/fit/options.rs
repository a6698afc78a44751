/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

///
/// Settings for a curve fitting operation
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FitOptions {
    /// Maximum squared distance allowed between a point and the fitted curve
    pub tolerance: f64,

    /// Maximum number of reparameterize-and-refit rounds before a range of points is split
    pub max_iterations: usize,

    /// Maximum number of times a range may be split (`None` for no limit)
    ///
    /// When the limit is reached the best curve found so far is used even if it's not within the tolerance.
    pub max_depth: Option<usize>,

    /// A split fits its two halves in parallel when both have at least this many points (with the `multithreading` feature)
    pub parallel_threshold: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            tolerance: 1.0,
            max_iterations: MAX_ITERATIONS,
            max_depth: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl FitOptions {
    ///
    /// Creates the default options with the specified (squared distance) tolerance
    ///
    pub fn with_tolerance(tolerance: f64) -> FitOptions {
        FitOptions {
            tolerance,
            ..FitOptions::default()
        }
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> FitOptions {
        FitOptions { max_iterations, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> FitOptions {
        FitOptions {
            max_depth: Some(max_depth),
            ..self
        }
    }

    pub fn with_parallel_threshold(self, parallel_threshold: usize) -> FitOptions {
        FitOptions {
            parallel_threshold,
            ..self
        }
    }
}
