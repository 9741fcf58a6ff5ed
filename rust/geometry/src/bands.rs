// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Band classification
//!
//! Partitions [min, max] of the potential sequence into a fixed number of
//! equal-width intervals and assigns each value the index of the first
//! right edge ≥ value (right-inclusive digitize). The threshold generation
//! and the tie-break live here as explicit code rather than behind a
//! library call, so the boundary policy is test-verified.

use crate::error::{Error, Result};

/// Evenly spaced samples over [start, stop], both ends included
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let step = (stop - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Fixed set of right-edge thresholds over a potential range.
#[derive(Debug, Clone)]
pub struct BandScale {
    thresholds: Vec<f64>,
}

impl BandScale {
    /// Build a scale with `bands` contiguous intervals over the range of
    /// `potentials`.
    ///
    /// `bands + 1` evenly spaced sample points are generated over
    /// [min, max] and the first is discarded, leaving one right edge per
    /// band. Fails on an empty sequence or a zero band count. When all
    /// potentials are equal every value lands in band 0.
    pub fn from_potentials(potentials: &[f64], bands: usize) -> Result<Self> {
        if potentials.is_empty() {
            return Err(Error::EmptyInput("no face potentials to classify".to_string()));
        }
        if bands == 0 {
            return Err(Error::InvalidParameter {
                field: "bands",
                reason: "at least one band is required".to_string(),
            });
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &p in potentials {
            min = min.min(p);
            max = max.max(p);
        }

        let thresholds = linspace(min, max, bands + 1).split_off(1);
        Ok(Self { thresholds })
    }

    /// Number of bands
    #[inline]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// True when the scale holds no thresholds
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Right-edge thresholds, ascending
    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Band index for a value: the first threshold ≥ value wins.
    ///
    /// Values beyond the last threshold (float drift) clamp to the last
    /// band.
    #[inline]
    pub fn band_of(&self, value: f64) -> usize {
        let idx = self.thresholds.partition_point(|&edge| edge < value);
        idx.min(self.thresholds.len() - 1)
    }

    /// Classify a whole sequence, preserving order
    pub fn classify(&self, potentials: &[f64]) -> Vec<usize> {
        potentials.iter().map(|&p| self.band_of(p)).collect()
    }
}
