/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Number of reparameterize-and-refit rounds attempted before a point range is split
pub const MAX_ITERATIONS: usize = 20;

/// Refitting stops early when the error changes by less than this ratio between rounds (with the same split point)
pub const STALL_RATIO: f64 = 0.0001;

/// Fitted control point distances smaller than this fraction of the chord length are replaced by the chord/3 heuristic
pub const ALPHA_EPSILON: f64 = 1.0e-6;

/// Number of segments used when building the arc-length table for a curve
pub const ARC_LENGTH_SEGMENTS: usize = 10;

/// Splits whose halves are both at least this long fit them on separate threads (when multithreading is enabled)
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;
