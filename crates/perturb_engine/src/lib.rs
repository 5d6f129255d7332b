//! Black-box symbolic perturbation of exact geometric predicates.
//!
//! Geometric predicates built on exact integer arithmetic still face
//! degeneracies: four cocircular points, three collinear points, two
//! coincident vertices. This crate resolves every such tie
//! deterministically by evaluating the predicate under an infinitesimal
//! pseudorandom perturbation keyed on point identity, so that all
//! predicate calls across an entire computation agree on how each tie
//! breaks.
//!
//! The entry point is [`perturbed_sign`]; see [`perturb`] for the scheme
//! and [`interpolate`] for the divided-difference machinery behind it.
//! Pure leaves (the counter PRF, monomial enumeration, the
//! inverse-Vandermonde tables) live in `perturb_math` and are re-exported
//! where callers need them.

pub mod error;
pub mod interpolate;
pub mod perturb;

pub use error::PerturbError;
pub use perturb::{perturbed_sign, Point};

pub use perturb_math::counter::{perturbation, LOG_BOUND};
pub use perturb_math::vandermonde::MAX_DEGREE;
