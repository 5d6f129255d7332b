use thiserror::Error;

use perturb_math::{MAX_DEGREE, MAX_MONOMIALS};

/// Precondition failures detectable at the engine boundary.
///
/// Everything else the engine can hit is a caller bug (duplicate point
/// ids, a predicate of higher degree than declared) and is checked with
/// debug assertions rather than surfaced here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PerturbError {
    #[error("predicate degree {degree} outside supported range 1..={MAX_DEGREE}")]
    DegreeOutOfRange { degree: usize },

    #[error("escalation to {variables} perturbation variables needs {count} monomials (cap {MAX_MONOMIALS})")]
    MonomialOverflow { variables: usize, count: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = PerturbError::DegreeOutOfRange { degree: 40 };
        let msg = e.to_string();
        assert!(msg.contains("40"), "missing degree in: {msg}");
        assert!(msg.contains("12"), "missing bound in: {msg}");

        let e = PerturbError::MonomialOverflow {
            variables: 9,
            count: 1 << 22,
        };
        let msg = e.to_string();
        assert!(msg.contains("4194304"), "missing count in: {msg}");
    }
}
