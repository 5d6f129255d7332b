//! General-purpose black-box simulation of simplicity.
//!
//! [`perturbed_sign`] computes
//!
//! ```text
//! lim_{ε_k -> 0+} sign(f(x + Σ_{k≥1} ε_k y_k))
//! ```
//!
//! where the `y_k` are fixed pseudorandom vectors keyed on point identity
//! and `ε_i ≫ ε_j` for `i < j` in the limit. Almost always the first
//! `ε_1 y_1` term already breaks the degeneracy, so the practical cost is
//! `degree` predicate calls plus an integer triangular solve. The scheme
//! combines the fully general symbolic treatment of Yap 1990 with the
//! randomized linear scheme of Seidel 1998; each escalation round
//! recovers the expanded predicate coefficients by divided differences
//! on the easy corner.

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;

use perturb_math::counter::perturbation;
use perturb_math::monomial::{format_monomial, infinitesimal_less, monomial_count, monomials};
use perturb_math::vandermonde::MAX_DEGREE;
use perturb_math::MAX_MONOMIALS;

use crate::error::PerturbError;
use crate::interpolate::{multivariate_interpolation, scaled_univariate_interpolation};

/// An input point: a stable identity plus integer coordinates.
///
/// The identity decides the perturbation, so two calls that pass the same
/// id receive the same infinitesimal offset at every level; ids must be
/// unique within one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point<const M: usize> {
    pub id: u64,
    pub coord: [i64; M],
}

impl<const M: usize> Point<M> {
    pub fn new(id: u64, coord: [i64; M]) -> Self {
        Self { id, coord }
    }
}

/// Sign of an integer polynomial predicate under symbolic perturbation.
///
/// `predicate` must be a polynomial of total degree ≤ `degree` in the
/// concatenated point coordinates, evaluated exactly; an overestimated
/// `degree` is safe, a tight one is fastest. Returns `true` iff the
/// perturbed sign is positive. There is no "zero" outcome: the
/// perturbation breaks every tie, and escalation terminates by
/// nondegeneracy of the interpolation lattice.
///
/// Callers are expected to short-circuit when the unperturbed predicate
/// value is already nonzero; the engine always runs the perturbed path.
pub fn perturbed_sign<const M: usize, F>(
    predicate: F,
    degree: usize,
    points: &[Point<M>],
) -> Result<bool, PerturbError>
where
    F: Fn(&[[i64; M]]) -> BigInt,
{
    if degree < 1 || degree > MAX_DEGREE {
        return Err(PerturbError::DegreeOutOfRange { degree });
    }
    let n = points.len();
    tracing::debug!(target: "perturb", degree, points = n, "perturbed_sign");

    // Point ids within one call must be unique; a duplicate would make
    // two distinct points share a perturbation and reintroduce ties.
    #[cfg(debug_assertions)]
    {
        let mut ids = rustc_hash::FxHashSet::default();
        for p in points {
            debug_assert!(ids.insert(p.id), "duplicate point id {}", p.id);
        }
    }

    let mut z = vec![[0i64; M]; n];

    #[cfg(feature = "self-check")]
    {
        use num_traits::Zero;
        for (zi, p) in z.iter_mut().zip(points) {
            *zi = p.coord;
        }
        assert!(
            predicate(&z).is_zero(),
            "self-check: predicate does not vanish at the unperturbed input"
        );
    }

    // Level-1 perturbations; escalation appends further levels in place.
    let mut y: Vec<[i64; M]> = points.iter().map(|p| perturbation::<M>(1, p.id)).collect();

    // Round 1: a single perturbation variable. The predicate restricted
    // to the ray x + t*y_1 is univariate in t with zero constant term
    // (the caller guarantees degeneracy), so the specialized integer
    // solver applies. Scanning the coefficients from t^1 upward visits
    // them in decreasing infinitesimal magnitude.
    {
        let mut values: Vec<BigInt> = Vec::with_capacity(degree);
        for j in 1..=degree as i64 {
            for (zi, (p, yi)) in z.iter_mut().zip(points.iter().zip(&y)) {
                for c in 0..M {
                    zi[c] = p.coord[c] + j * yi[c];
                }
            }
            values.push(predicate(&z));
        }
        scaled_univariate_interpolation(&mut values);

        for (j, v) in values.iter().enumerate() {
            match v.sign() {
                Sign::NoSign => continue,
                s => {
                    tracing::debug!(target: "perturb", term = j + 1, "round 1 resolved");
                    return Ok(s == Sign::Plus);
                }
            }
        }
    }
    tracing::debug!(target: "perturb", "round 1 vanished, escalating");

    // Add one perturbation variable after another until some coefficient
    // survives. Each round redoes the previous rounds' work; that waste
    // is irrelevant because the first round almost always suffices.
    for d in 1usize.. {
        // Round 1 already computed the level-1 slab of y.
        if d > 1 {
            for p in points {
                y.push(perturbation::<M>(d as u64, p.id));
            }
        }

        let count = monomial_count(degree, d);
        if count > MAX_MONOMIALS as u64 {
            return Err(PerturbError::MonomialOverflow {
                variables: d,
                count,
            });
        }
        let lambda = monomials(degree, d);

        // Evaluate the predicate at every easy-corner lattice point.
        let mut values: Vec<BigRational> = Vec::with_capacity(lambda.rows());
        for j in 0..lambda.rows() {
            let row = lambda.row(j);
            for (i, (zi, p)) in z.iter_mut().zip(points).enumerate() {
                for c in 0..M {
                    let mut zc = p.coord[c];
                    for (v, &e) in row.iter().enumerate() {
                        zc += e as i64 * y[v * n + i][c];
                    }
                    zi[c] = zc;
                }
            }
            values.push(BigRational::from_integer(predicate(&z)));
        }

        multivariate_interpolation(degree, &lambda, &mut values);

        // Among the surviving coefficients, the one whose monomial is
        // maximal in the infinitesimal size order dominates the limit.
        let mut sign = 0i8;
        let mut sign_row = usize::MAX;
        for (j, v) in values.iter().enumerate() {
            let s = match v.numer().sign() {
                Sign::NoSign => continue,
                Sign::Plus => 1i8,
                Sign::Minus => -1i8,
            };
            // A term the previous round proved zero cannot reappear.
            #[cfg(feature = "self-check")]
            assert!(
                lambda.get(j, d - 1) > 0,
                "self-check: vanished term {} reappeared",
                format_monomial(lambda.row(j))
            );
            if sign == 0 || infinitesimal_less(lambda.row(sign_row), lambda.row(j)) {
                sign = s;
                sign_row = j;
            }
        }

        if sign != 0 {
            tracing::debug!(
                target: "perturb",
                level = d,
                term = %format_monomial(lambda.row(sign_row)),
                "escalation resolved"
            );
            return Ok(sign > 0);
        }
        tracing::debug!(target: "perturb", level = d, "all coefficients vanished");
    }
    unreachable!("escalation loop only exits by returning")
}
