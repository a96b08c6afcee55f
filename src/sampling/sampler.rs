//! Inverse-cost weighted path selection.
//!
//! Each candidate path gets the unnormalized weight `1 / (distance + 1)`;
//! the `+ 1` keeps zero-distance paths finite. Weights are normalized to a
//! probability distribution and one path is drawn from it.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::SamplingError;
use crate::models::Path;

/// Selection probability of each candidate, in input order. Sums to 1.
///
/// # Errors
///
/// [`SamplingError::NoPathAvailable`] for an empty input, and
/// [`SamplingError::InvalidDistribution`] if the weights cannot be
/// normalized (e.g. a negative or NaN distance).
///
/// # Examples
///
/// ```
/// use geo_routing::models::{NodeId, Path};
/// use geo_routing::sampling::selection_probabilities;
///
/// let paths = vec![
///     Path::new(vec![NodeId::from("a"), NodeId::from("b")], 0.0),
///     Path::new(vec![NodeId::from("a"), NodeId::from("c"), NodeId::from("b")], 1.0),
/// ];
/// let p = selection_probabilities(&paths).unwrap();
/// // weights 1 and 1/2
/// assert!((p[0] - 2.0 / 3.0).abs() < 1e-12);
/// assert!((p[1] - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn selection_probabilities(paths: &[Path]) -> Result<Vec<f64>, SamplingError> {
    if paths.is_empty() {
        return Err(SamplingError::NoPathAvailable);
    }

    let weights: Vec<f64> = paths.iter().map(|p| 1.0 / (p.distance() + 1.0)).collect();
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 || weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(SamplingError::InvalidDistribution { total });
    }

    Ok(weights.into_iter().map(|w| w / total).collect())
}

/// Draws one path with probability proportional to `1 / (distance + 1)`.
///
/// A single candidate is returned without consuming randomness. Passing a
/// seeded generator makes the draw reproducible.
///
/// # Errors
///
/// Same as [`selection_probabilities`], plus [`SamplingError::Weighted`] if
/// the weighted index rejects the distribution.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use geo_routing::models::{NodeId, Path};
/// use geo_routing::sampling::sample_path;
///
/// let only = vec![Path::new(vec![NodeId::from("a"), NodeId::from("b")], 5.0)];
/// let mut rng = StdRng::seed_from_u64(42);
/// assert_eq!(sample_path(&only, &mut rng).unwrap(), &only[0]);
/// ```
pub fn sample_path<'a, R: Rng + ?Sized>(
    paths: &'a [Path],
    rng: &mut R,
) -> Result<&'a Path, SamplingError> {
    let probabilities = selection_probabilities(paths)?;
    if let [only] = paths {
        return Ok(only);
    }

    let index = WeightedIndex::new(&probabilities)?;
    Ok(&paths[index.sample(rng)])
}
