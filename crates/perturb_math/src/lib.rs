//! Pure-math leaves of the symbolic perturbation engine.
//!
//! Everything in this crate is a pure function or an immutable
//! compile-time table: the deterministic counter PRF that produces
//! per-(level, id) perturbation vectors, the monomial enumerator for the
//! interpolation lattice, and the precomputed inverse-Vandermonde
//! factors. No big-number state lives here; that belongs to
//! `perturb_engine`.

pub mod counter;
pub mod monomial;
pub mod vandermonde;

pub use counter::{perturbation, LOG_BOUND};
pub use monomial::{infinitesimal_less, monomial_count, monomials, MonomialTable, MAX_MONOMIALS};
pub use vandermonde::{lower_triangle, sigma, MAX_DEGREE};
