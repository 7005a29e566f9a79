//! Bit-level instance transformations for pseudo-boolean problems
//!
//! Four independent maps, each deterministic in its inputs:
//! - a dummy-variable mask selecting the subset of positions that influence
//!   the objective,
//! - an epistasis map remapping consecutive sub-blocks through a fixed
//!   rotation-XOR scheme,
//! - a neutrality map collapsing groups of bits into one effective bit,
//! - a ruggedness map permuting the function's output ordering.

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Which fixed output permutation a ruggedness variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuggednessKind {
    /// Swap adjacent output levels below the optimum
    R1,
    /// Reverse all output levels below the optimum (deceptive)
    R2,
    /// Rotate output levels within blocks of five
    R3,
}

/// Positions of the bits that keep influencing the objective.
///
/// Draws `round(n * select_rate)` distinct positions from `[0, n)` using the
/// given seed and returns them sorted. A rate of 0.9 keeps 90% of the bits
/// and turns the remaining 10% into dummy variables.
pub fn dummy_mask(n: usize, select_rate: f64, seed: u64) -> Vec<usize> {
    let keep = ((n as f64) * select_rate).round() as usize;
    let keep = keep.min(n);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions: Vec<usize> = (0..n).collect();

    // partial Fisher-Yates: the first `keep` slots end up uniformly chosen
    for i in 0..keep {
        let j = rng.random_range(i..n);
        positions.swap(i, j);
    }
    positions.truncate(keep);
    positions.sort_unstable();
    positions
}

/// Project a bit string onto the selected positions.
pub fn select(x: &[u8], mask: &[usize]) -> Vec<u8> {
    mask.iter().map(|&i| x[i]).collect()
}

/// Remap each block of `block_size` bits through the rotation-XOR scheme.
///
/// Output bit `i` of a block of width `w` is the XOR of all block bits except
/// the one at offset `j` with `w - j - 1 == (w - i) % w`. A trailing block
/// shorter than `block_size` is remapped with the same scheme at its own
/// width.
pub fn epistasis(x: &[u8], block_size: usize) -> Vec<u8> {
    let n = x.len();
    let mut out = vec![0u8; n];
    let mut h = 0;

    while h < n {
        let w = block_size.min(n - h);
        for i in 0..w {
            let mut acc = 0u8;
            for j in 0..w {
                if w - j - 1 != (w - i) % w {
                    acc ^= x[h + j] & 1;
                }
            }
            out[h + i] = acc;
        }
        h += w;
    }
    out
}

/// Collapse each full group of `mu` bits into its majority bit.
///
/// A trailing group shorter than `mu` does not contribute, so the effective
/// dimension is `n / mu`.
pub fn neutrality(x: &[u8], mu: usize) -> Vec<u8> {
    x.chunks_exact(mu)
        .map(|chunk| {
            let ones = chunk.iter().filter(|&&b| b == 1).count();
            u8::from(2 * ones >= mu)
        })
        .collect()
}

/// Permute an integer-valued objective through a fixed bijection on `[0, n]`.
///
/// The optimum level `n` is always a fixed point, so the transformed problem
/// keeps the same optimal value.
pub fn ruggedness(y: f64, n: usize, kind: RuggednessKind) -> f64 {
    let level = y.round() as usize;
    if level >= n {
        return n as f64;
    }
    let mapped = match kind {
        RuggednessKind::R1 => {
            // swap pairs (0,1), (2,3), ...; an unpaired last level stays put
            let partner = level ^ 1;
            if partner < n { partner } else { level }
        }
        RuggednessKind::R2 => n - 1 - level,
        RuggednessKind::R3 => {
            let block_start = (level / 5) * 5;
            let block_len = 5.min(n - block_start);
            block_start + (level - block_start + 1) % block_len
        }
    };
    mapped as f64
}
