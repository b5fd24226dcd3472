use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::{
    Rational, Share, ShamirError,
    combinations::combinations,
    constants::{DEALER_COEFFICIENT_SIZE, MIN_THRESHOLD, SHARE_LABEL_PREFIX},
    interpolate::{value_at, value_at_zero},
    shamir_error::Result,
};

fn validate_parameters(threshold: usize, share_count: usize) -> Result<()> {
    if share_count == 0 {
        return Err(ShamirError::TooFewShares);
    } else if threshold < 1 || threshold > share_count {
        return Err(ShamirError::InvalidThreshold);
    }
    Ok(())
}

/// Evaluates the polynomial with the given coefficients (constant term first)
/// at `x` using Horner's rule.
fn evaluate_polynomial(coefficients: &[BigUint], x: u64) -> BigUint {
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, coefficient| acc * x + coefficient)
}

/// Splits `secret` into `share_count` shares, any `threshold` of which
/// determine it.
///
/// The shares are points `(x, f(x))` for `x = 1..=share_count` of a polynomial
/// with non-negative integer coefficients and constant term `secret`. Shares
/// computed over the integers rather than a finite field leak information
/// about the secret, so this dealer is suited to testing and demonstration,
/// not to protecting real secrets.
pub fn split_secret(
    threshold: usize,
    share_count: usize,
    secret: &BigUint,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<Vec<Share>> {
    validate_parameters(threshold, share_count)?;

    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret.clone());

    let mut random_data = [0u8; DEALER_COEFFICIENT_SIZE];
    for _ in 1..threshold {
        random_generator.fill_random_data(&mut random_data);
        coefficients.push(BigUint::from_bytes_be(&random_data));
    }
    memzero(&mut random_data);

    // A zero leading coefficient would lower the degree below threshold - 1.
    if threshold > 1 {
        if let Some(leading) = coefficients.last_mut().filter(|c| c.is_zero()) {
            *leading = BigUint::from(1u8);
        }
    }

    let shares = (1..=share_count as u64)
        .map(|x| {
            Share::new(
                x as i64,
                evaluate_polynomial(&coefficients, x),
                format!("{}{}", SHARE_LABEL_PREFIX, x),
            )
        })
        .collect();

    Ok(shares)
}

/// The outcome of a successful reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    secret: Rational,
    supporting_subset: Vec<Share>,
    fit_vector: Vec<bool>,
    fit_count: usize,
}

impl Recovery {
    /// The polynomial's value at zero.
    pub fn secret(&self) -> &Rational {
        &self.secret
    }

    /// The secret as an integer string, or `None` if it is not integral.
    pub fn secret_string(&self) -> Option<String> {
        self.secret.to_integer().map(|s| s.to_string())
    }

    /// The threshold-sized basis that defined the winning polynomial.
    pub fn supporting_subset(&self) -> &[Share] {
        &self.supporting_subset
    }

    pub fn supporting_xs(&self) -> Vec<i64> {
        self.supporting_subset.iter().map(Share::x).collect()
    }

    /// One entry per input share: `true` if it lies on the winning polynomial.
    pub fn fit_vector(&self) -> &[bool] {
        &self.fit_vector
    }

    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    /// Indices of the shares that lie on the winning polynomial.
    pub fn good_shares(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Indices of the shares that do not.
    pub fn bad_shares(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    fn indices_where(&self, fits: bool) -> Vec<usize> {
        self.fit_vector
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f == fits)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the reconstructed secret is an integer.
    pub fn is_clean(&self) -> bool {
        self.secret.is_integer()
    }

    /// Whether every supplied share lies on the winning polynomial.
    pub fn is_unanimous(&self) -> bool {
        self.fit_count == self.fit_vector.len()
    }

    /// Whether at least one share outside the basis agrees with it. A basis
    /// always explains its own members, so a result that is not corroborated
    /// has no independent support.
    pub fn is_corroborated(&self) -> bool {
        self.fit_count > self.supporting_subset.len()
    }
}

/// A scored basis subset, tagged with its position in enumeration order.
#[derive(Debug)]
struct Candidate<'a> {
    index: usize,
    secret: Rational,
    subset: Vec<&'a Share>,
    fit_vector: Vec<bool>,
    fit_count: usize,
}

impl Candidate<'_> {
    /// Higher fit count wins; ties go to the earlier subset.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn preferred<'a>(a: Candidate<'a>, b: Candidate<'a>) -> Candidate<'a> {
        if b.fit_count > a.fit_count || (b.fit_count == a.fit_count && b.index < a.index) {
            b
        } else {
            a
        }
    }

    fn into_recovery(self) -> Recovery {
        Recovery {
            secret: self.secret,
            supporting_subset: self.subset.into_iter().cloned().collect(),
            fit_vector: self.fit_vector,
            fit_count: self.fit_count,
        }
    }
}

fn has_repeated_x(subset: &[&Share]) -> bool {
    subset
        .iter()
        .enumerate()
        .any(|(i, a)| subset[i + 1..].iter().any(|b| a.x() == b.x()))
}

/// Whether `share` lies exactly on the polynomial through `subset`.
fn fits(subset: &[&Share], share: &Share) -> Result<bool> {
    let predicted = value_at(subset, share.x())?;
    Ok(predicted.to_integer() == Some(&share.y_int()))
}

/// Scores one basis subset against every share. Returns `None` for
/// degenerate subsets.
fn evaluate<'a>(
    shares: &'a [Share],
    index: usize,
    subset: Vec<&'a Share>,
) -> Result<Option<Candidate<'a>>> {
    if has_repeated_x(&subset) {
        debug!(index, "skipping subset with repeated x");
        return Ok(None);
    }
    let secret = match value_at_zero(&subset) {
        Ok(secret) => secret,
        Err(ShamirError::DegenerateSubset) => {
            debug!(index, "skipping degenerate subset");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    let fit_vector = shares
        .iter()
        .map(|share| fits(&subset, share))
        .collect::<Result<Vec<bool>>>()?;
    let fit_count = fit_vector.iter().filter(|&&f| f).count();
    trace!(index, fit_count, %secret, "scored subset");
    Ok(Some(Candidate {
        index,
        secret,
        subset,
        fit_vector,
        fit_count,
    }))
}

#[cfg(not(feature = "parallel"))]
fn search(shares: &[Share], threshold: usize) -> Result<Option<Candidate<'_>>> {
    let mut best: Option<Candidate<'_>> = None;
    for (index, subset) in combinations(shares, threshold).enumerate() {
        let Some(candidate) = evaluate(shares, index, subset)? else {
            continue;
        };
        let unanimous = candidate.fit_count == shares.len();
        if best.as_ref().is_none_or(|b| candidate.fit_count > b.fit_count) {
            best = Some(candidate);
        }
        if unanimous {
            break;
        }
    }
    Ok(best)
}

/// Scores subsets on the rayon pool. Once some subset explains every share,
/// subsets later in enumeration order are no longer evaluated; earlier ones
/// still are, so the merge by (fit count, index) picks the same subset as the
/// sequential search.
#[cfg(feature = "parallel")]
fn search(shares: &[Share], threshold: usize) -> Result<Option<Candidate<'_>>> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let unanimous_at = AtomicUsize::new(usize::MAX);
    combinations(shares, threshold)
        .enumerate()
        .par_bridge()
        .filter(|(index, _)| *index < unanimous_at.load(Ordering::Relaxed))
        .filter_map(|(index, subset)| match evaluate(shares, index, subset) {
            Ok(Some(candidate)) => {
                if candidate.fit_count == shares.len() {
                    unanimous_at.fetch_min(index, Ordering::Relaxed);
                }
                Some(Ok(candidate))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        })
        .try_reduce_with(|a, b| Ok(Candidate::preferred(a, b)))
        .transpose()
}

/// Reconstructs the secret from `shares`, tolerating shares that do not lie
/// on the polynomial.
///
/// Every `threshold`-sized subset with distinct `x` values is interpolated
/// exactly and scored by how many of *all* the shares lie on the resulting
/// polynomial. The first subset with the highest score wins; the search stops
/// early once a subset explains every share.
///
/// Fails with [`ShamirError::InvalidThreshold`] if `threshold` is below
/// [`MIN_THRESHOLD`](crate::MIN_THRESHOLD) or exceeds the number of shares,
/// and with [`ShamirError::ReconstructionFailed`] if every subset is
/// degenerate.
pub fn recover_secret(shares: &[Share], threshold: usize) -> Result<Recovery> {
    if threshold < MIN_THRESHOLD || threshold > shares.len() {
        return Err(ShamirError::InvalidThreshold);
    }
    debug!(threshold, share_count = shares.len(), "searching for consensus polynomial");

    let Some(best) = search(shares, threshold)? else {
        debug!("no non-degenerate subset");
        return Err(ShamirError::ReconstructionFailed);
    };
    debug!(
        index = best.index,
        fit_count = best.fit_count,
        share_count = shares.len(),
        "selected consensus polynomial"
    );
    Ok(best.into_recovery())
}
