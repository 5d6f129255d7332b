//! Deterministic counter-mode PRF for perturbation vectors.
//!
//! Perturbations must be a pure function of `(level, point id)` so that
//! every predicate evaluation sharing a point identity sees the same
//! infinitesimal offset, across calls and across processes. There is
//! deliberately no seed parameter. The block function is Threefry-2x64
//! with 20 rounds (Salmon et al., "Parallel random numbers: as easy as
//! 1, 2, 3", SC'11): far more mixing than geometric inputs require, and
//! collision-free for all practical purposes.

/// Log2 of the perturbation magnitude bound: each vector component lies
/// in `[-2^LOG_BOUND, 2^LOG_BOUND)`.
///
/// Chosen so that `degree * max|Y| + max|x|` stays far inside `i64` for
/// every supported degree, and so a component fits one 32-bit field of
/// the 128-bit block.
pub const LOG_BOUND: u32 = 24;

const _: () = assert!(LOG_BOUND + 1 <= 32);

/// Threefish key-schedule parity constant.
const SKEIN_KS_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Rotation distances for Threefry-2x64.
const ROTATIONS: [u32; 8] = [16, 42, 12, 31, 16, 32, 24, 21];

/// Threefry-2x64-20 block function: a keyed bijection on 128-bit blocks.
///
/// The key is `(key, 0)` and the plaintext block is `(counter, 0)`; the
/// two output words are packed little-endian into the returned `u128`.
pub fn threefry(key: u64, counter: u64) -> u128 {
    let ks = [key, 0, key ^ SKEIN_KS_PARITY];
    let mut x0 = counter.wrapping_add(ks[0]);
    let mut x1 = ks[1];
    for round in 0..20u32 {
        x0 = x0.wrapping_add(x1);
        x1 = x1.rotate_left(ROTATIONS[round as usize % 8]);
        x1 ^= x0;
        if round % 4 == 3 {
            let s = (round / 4 + 1) as usize;
            x0 = x0.wrapping_add(ks[s % 3]);
            x1 = x1.wrapping_add(ks[(s + 1) % 3]).wrapping_add(s as u64);
        }
    }
    ((x1 as u128) << 64) | x0 as u128
}

/// The fixed pseudorandom perturbation vector for `(level, id)`.
///
/// The 128-bit block is partitioned into `M` 32-bit fields; each field is
/// masked to `LOG_BOUND + 1` bits and recentered, so components are
/// uniform over `[-2^LOG_BOUND, 2^LOG_BOUND)`. Levels start at 1.
#[inline]
pub fn perturbation<const M: usize>(level: u64, id: u64) -> [i64; M] {
    const { assert!(M >= 1 && M <= 4) };
    let bits = threefry(level, id);
    let limit = 1i64 << LOG_BOUND;
    let mut result = [0i64; M];
    for (a, r) in result.iter_mut().enumerate() {
        let field = (bits >> (32 * a)) as u32 as i64;
        *r = (field & (2 * limit - 1)) - limit;
    }
    result
}
