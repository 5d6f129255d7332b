//! In-place divided-difference interpolation on the easy corner.
//!
//! Both solvers recover monomial coefficients of a polynomial from its
//! values on the lattice of multi-indices with total degree ≤ `degree`
//! (the "easy corner", where the evaluation point of row `λ` is `λ`
//! itself). The multivariate pass structure follows Neidinger 2010,
//! "Multivariable interpolating polynomials in Newton forms"; the
//! univariate specialization clears fractions through the precomputed
//! inverse-Vandermonde factors so it runs on integers only.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Zero;

use perturb_math::monomial::MonomialTable;
use perturb_math::vandermonde::{lower_triangle, sigma};

/// Univariate interpolation, specialized for a zero constant term.
///
/// On entry `values[j-1]` holds `f(j)` for `j = 1..=degree` of a
/// polynomial `f` with `f(0) = 0`. On exit `values[k-1]` is the
/// coefficient of `x^k`, scaled by `degree!`. The scale keeps every
/// intermediate integral; it never changes a sign.
pub fn scaled_univariate_interpolation(values: &mut [BigInt]) {
    let degree = values.len();

    // Inverse of the lower-triangular factor, processed in reverse so
    // each row reads only not-yet-overwritten entries. Stored row k is
    // scaled by k!, hence the running factor degree!/k!.
    let mut factor: i64 = 1;
    for k in (0..degree).rev() {
        let (low, rest) = values.split_at_mut(k);
        let vk = &mut rest[0];
        for (i, vi) in low.iter().enumerate() {
            *vk += vi * lower_triangle(k + 1, i + 1);
        }
        *vk *= factor;
        factor *= (k + 1) as i64;
    }

    // Inverse of the special upper-triangular factor; integral as is.
    for k in 0..degree {
        let (low, rest) = values.split_at_mut(k);
        let vk = &rest[0];
        for (i, vi) in low.iter_mut().enumerate() {
            *vi += vk * sigma(k + 1, i + 1);
        }
    }
}

/// Divide a canonical rational by a small positive integer, in place.
///
/// Pulls the common factor out of the numerator first so magnitudes stay
/// bounded, then grows the denominator by what is left; the result is
/// again canonical (reduced, positive denominator).
fn rational_div_small(x: &mut BigRational, n: i64) {
    debug_assert!(n > 0);
    let n = BigInt::from(n);
    let g = x.numer().gcd(&n);
    let numer = x.numer() / &g;
    let denom = x.denom() * (n / g);
    *x = BigRational::new_raw(numer, denom);
}

/// General interpolation over the easy corner spanned by `lambda`.
///
/// On entry `values[k]` holds the predicate value at the lattice point
/// `lambda.row(k)`; on exit it holds the exact coefficient of the
/// monomial `lambda.row(k)` of the unique interpolating polynomial of
/// total degree ≤ `degree`. `lambda` must be ordered by ascending total
/// degree, which [`perturb_math::monomials`] guarantees.
pub fn multivariate_interpolation(
    degree: usize,
    lambda: &MonomialTable,
    values: &mut [BigRational],
) {
    let rows = lambda.rows();
    let n = lambda.vars();
    assert_eq!(rows, values.len());

    // Rectangular flat-index map from multi-index to storage row; fine
    // for the few perturbation variables escalation ever reaches.
    let mut powers = vec![1usize; n + 1];
    for i in 0..n {
        powers[i + 1] = powers[i] * (degree + 1);
    }
    let mut to_flat = vec![u32::MAX; powers[n]];
    let mut from_flat = vec![0usize; rows];
    for k in 0..rows {
        let f: usize = lambda
            .row(k)
            .iter()
            .enumerate()
            .map(|(i, &e)| powers[i] * e as usize)
            .sum();
        from_flat[k] = f;
        to_flat[f] = k as u32;
    }

    // Per-row divided-difference bookkeeping: which variable the row is
    // currently consuming and how much of its exponent is left.
    let mut info: Vec<(usize, u8)> = (0..rows).map(|k| (0, lambda.get(k, 0))).collect();

    // Self-check mode tracks the full remaining multi-index per row and
    // verifies each update pairs rows whose remainders agree.
    #[cfg(feature = "self-check")]
    let mut shadow: Vec<Vec<u8>> = (0..rows).map(|k| lambda.row(k).to_vec()).collect();

    // Phase A: divided differences, one pass per total degree. Rows are
    // walked from the highest down so a row's child (one exponent lower,
    // hence an earlier row) is still untouched within the pass.
    for _pass in 1..=degree {
        'pass: {
            for k in (0..rows).rev() {
                {
                    let (cursor, remaining) = &mut info[k];
                    while *remaining == 0 {
                        *cursor += 1;
                        if *cursor == n {
                            // This degree is exhausted; every smaller row
                            // is exhausted too, by the degree ordering.
                            break 'pass;
                        }
                        *remaining = lambda.get(k, *cursor);
                    }
                    *remaining -= 1;
                }
                let (cursor, remaining) = info[k];
                let child = to_flat[from_flat[k] - powers[cursor]] as usize;
                let denominator = (lambda.get(k, cursor) - remaining) as i64;

                let (low, rest) = values.split_at_mut(k);
                let vk = &mut rest[0];
                *vk -= &low[child];
                rational_div_small(vk, denominator);

                #[cfg(feature = "self-check")]
                {
                    shadow[k][cursor] -= 1;
                    assert_eq!(shadow[k], shadow[child], "divided-difference pairing");
                }
            }
        }
    }

    // Phase B: expand the Newton basis into the monomial basis. The
    // conversion matrix is special upper triangular w.r.t. the
    // componentwise partial order, with entries that factor per variable
    // into signed elementary symmetric polynomials; walking k upward
    // means each Newton coefficient is still pure when it is read.
    for k in 0..rows {
        let (low, rest) = values.split_at_mut(k);
        let vk = &rest[0];
        if vk.is_zero() {
            continue;
        }
        let beta = lambda.row(k);
        'targets: for kk in 0..k {
            let gamma = lambda.row(kk);
            let mut taus: i64 = 1;
            for i in 0..n {
                if gamma[i] > beta[i] {
                    continue 'targets;
                }
                if gamma[i] < beta[i] {
                    taus *= sigma(beta[i] as usize, gamma[i] as usize) as i64;
                }
            }
            low[kk] += vk * BigRational::from_integer(BigInt::from(taus));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn univariate_degree_one_is_identity() {
        let mut values = vec![big(-7)];
        scaled_univariate_interpolation(&mut values);
        assert_eq!(values, vec![big(-7)]);
    }

    #[test]
    fn univariate_degree_three_known_case() {
        // f(x) = x + 2x^2 + 3x^3, values at 1, 2, 3; expect 3! * (1, 2, 3).
        let mut values = vec![big(6), big(34), big(102)];
        scaled_univariate_interpolation(&mut values);
        assert_eq!(values, vec![big(6), big(12), big(18)]);
    }

    #[test]
    fn rational_div_small_stays_canonical() {
        let mut x = BigRational::new(big(6), big(5));
        rational_div_small(&mut x, 4);
        assert_eq!(x, BigRational::new(big(3), big(10)));
        assert!(x.denom() > &BigInt::zero());

        let mut y = BigRational::from_integer(big(-9));
        rational_div_small(&mut y, 3);
        assert_eq!(y, BigRational::from_integer(big(-3)));
        assert!(y.denom().is_one());
    }

    #[test]
    fn multivariate_constant_only() {
        // Degree 1 in 1 variable: f = 5 (constant), values at 0 and 1.
        let lambda = perturb_math::monomials(1, 1);
        let mut values = vec![
            BigRational::from_integer(big(5)),
            BigRational::from_integer(big(5)),
        ];
        multivariate_interpolation(1, &lambda, &mut values);
        assert_eq!(values[0], BigRational::from_integer(big(5)));
        assert!(values[1].is_zero());
    }
}
