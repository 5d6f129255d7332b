//! Precomputed inverse-Vandermonde factors for easy-corner interpolation.
//!
//! Interpolating at the lattice points `x = 1..k` factors the Vandermonde
//! matrix `V_ij = j^i` into a lower-triangular divided-difference part
//! and a special upper-triangular Newton-to-monomial part (Oliver 2009,
//! "On multivariate interpolation"). Both inverse factors are integral
//! after clearing fractions, so the univariate solver never needs
//! rational arithmetic.
//!
//! Two tables, both generated at compile time from the recurrences below
//! (const evaluation aborts the build on overflow, which is the
//! generation-time range check):
//!
//! - `sigma(n, k) = τ_{n-k}(n)` where `τ_r(k)` is the degree-`r` signed
//!   elementary symmetric polynomial of `0, 1, …, k-1`; equivalently the
//!   signed Stirling numbers of the first kind, the coefficients of the
//!   falling factorial `x(x-1)…(x-n+1) = Σ_k sigma(n,k) x^k`.
//!   Recurrences: `σ(0,0) = 1`, `σ(n,n) = 1`,
//!   `σ(n+1, k+1) = σ(n, k) - n·σ(n, k+1)`.
//! - `lower_triangle(k, i)`: row `k` of the inverse of the `k × k`
//!   leading Vandermonde submatrix, scaled by `k!`. Expanding the
//!   divided-difference functional over `0..k` (with the value at 0
//!   pinned to zero) collapses the row to signed binomials:
//!   `lower_triangle(k, i) = (-1)^(k-i) · C(k, i)`.

/// Largest supported interpolation degree.
///
/// Keeps every table entry, every per-variable product of `sigma`
/// entries, and the univariate solver's running `degree!/k!` factor
/// comfortably inside 32-bit words; `13!` is the first factorial that
/// does not fit.
pub const MAX_DEGREE: usize = 12;

const TABLE: usize = MAX_DEGREE + 1;

/// Signed elementary symmetric polynomials `σ(n, k) = τ_{n-k}(n)`.
static SIGMA: [[i32; TABLE]; TABLE] = build_sigma();

/// Inverse lower-triangular Vandermonde rows, row `k` scaled by `k!`.
static LOWER_TRIANGLE: [[i32; TABLE]; TABLE] = build_lower_triangle();

const fn build_sigma() -> [[i32; TABLE]; TABLE] {
    let mut wide = [[0i64; TABLE]; TABLE];
    wide[0][0] = 1;
    let mut n = 0;
    while n < MAX_DEGREE {
        let mut k = 0;
        while k <= n {
            wide[n + 1][k + 1] = wide[n][k] - (n as i64) * wide[n][k + 1];
            k += 1;
        }
        n += 1;
    }
    narrow(wide)
}

const fn build_lower_triangle() -> [[i32; TABLE]; TABLE] {
    // Pascal's triangle with alternating signs applied afterwards.
    let mut wide = [[0i64; TABLE]; TABLE];
    let mut k = 0;
    while k < TABLE {
        wide[k][0] = 1;
        let mut i = 1;
        while i <= k {
            wide[k][i] = wide[k - 1][i - 1] + wide[k - 1][i];
            i += 1;
        }
        k += 1;
    }
    let mut k = 0;
    while k < TABLE {
        let mut i = 0;
        while i <= k {
            if (k - i) % 2 == 1 {
                wide[k][i] = -wide[k][i];
            }
            i += 1;
        }
        k += 1;
    }
    narrow(wide)
}

const fn narrow(wide: [[i64; TABLE]; TABLE]) -> [[i32; TABLE]; TABLE] {
    let mut out = [[0i32; TABLE]; TABLE];
    let mut n = 0;
    while n < TABLE {
        let mut k = 0;
        while k < TABLE {
            let v = wide[n][k];
            assert!(v >= i32::MIN as i64 && v <= i32::MAX as i64);
            out[n][k] = v as i32;
            k += 1;
        }
        n += 1;
    }
    out
}

/// `σ(n, k)`: coefficient of `x^k` in `x(x-1)…(x-n+1)`, for `n, k ≤ MAX_DEGREE`.
#[inline]
pub fn sigma(n: usize, k: usize) -> i32 {
    SIGMA[n][k]
}

/// Row `k` of the scaled inverse lower Vandermonde factor, `1 ≤ i ≤ k ≤ MAX_DEGREE`.
#[inline]
pub fn lower_triangle(k: usize, i: usize) -> i32 {
    LOWER_TRIANGLE[k][i]
}
