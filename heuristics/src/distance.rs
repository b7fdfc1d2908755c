//! L1, L2 and Chebyshev distances.

use std::str::FromStr;

use thiserror::Error;

/// Failure of a distance computation or lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeuristicError {
    /// The two points have different dimensionality.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// A distance name did not match any known metric.
    #[error("unknown distance {name:?}")]
    UnknownDistance { name: String },
}

fn paired<'a>(
    p1: &'a [f64],
    p2: &'a [f64],
) -> Result<impl Iterator<Item = f64> + 'a, HeuristicError> {
    if p1.len() != p2.len() {
        return Err(HeuristicError::DimensionMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }
    Ok(p1.iter().zip(p2).map(|(a, b)| (a - b).abs()))
}

/// Manhattan distance: sum of absolute coordinate differences.
///
/// # Errors
///
/// Returns [`HeuristicError::DimensionMismatch`] if the points differ in length.
pub fn l1_norm(p1: &[f64], p2: &[f64]) -> Result<f64, HeuristicError> {
    Ok(paired(p1, p2)?.sum())
}

/// Euclidean distance.
///
/// # Errors
///
/// Returns [`HeuristicError::DimensionMismatch`] if the points differ in length.
pub fn l2_norm(p1: &[f64], p2: &[f64]) -> Result<f64, HeuristicError> {
    Ok(paired(p1, p2)?.map(|d| d * d).sum::<f64>().sqrt())
}

/// Chebyshev distance: largest absolute coordinate difference.
///
/// Zero-dimensional points are at distance 0. A NaN coordinate difference
/// makes the distance NaN, as it does for the other metrics.
///
/// # Errors
///
/// Returns [`HeuristicError::DimensionMismatch`] if the points differ in length.
pub fn chebyshev(p1: &[f64], p2: &[f64]) -> Result<f64, HeuristicError> {
    Ok(paired(p1, p2)?.fold(0.0, |max: f64, d| {
        if d.is_nan() || max.is_nan() {
            f64::NAN
        } else {
            max.max(d)
        }
    }))
}

/// A distance metric chosen by name, e.g. from a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    L1,
    L2,
    Chebyshev,
}

impl Distance {
    /// Evaluate this metric between two points.
    ///
    /// # Errors
    ///
    /// Returns [`HeuristicError::DimensionMismatch`] if the points differ in length.
    pub fn eval(self, p1: &[f64], p2: &[f64]) -> Result<f64, HeuristicError> {
        match self {
            Self::L1 => l1_norm(p1, p2),
            Self::L2 => l2_norm(p1, p2),
            Self::Chebyshev => chebyshev(p1, p2),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl FromStr for Distance {
    type Err = HeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l1" | "manhattan" => Ok(Self::L1),
            "l2" | "euclidean" => Ok(Self::L2),
            "chebyshev" | "linf" => Ok(Self::Chebyshev),
            _ => Err(HeuristicError::UnknownDistance { name: s.into() }),
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
