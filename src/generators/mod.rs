use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

/// Errors surfaced by maze generation.
///
/// Contract violations (carving between non-adjacent cells) are logic bugs,
/// not runtime conditions; those panic instead of appearing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenError {
    /// A maze needs at least one cell.
    #[error("maze size must be at least 1")]
    InvalidSize,
}

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Uniform random draws used during generation.
///
/// Every choice the generator makes — the entry row, tie-breaking among
/// unvisited neighbours, the exit region draws — goes through this one
/// seam, so tests can supply a pinned sequence instead of entropy.
pub trait RandomSource {
    /// A uniform pick from `[0, upper)`. `upper` must be non-zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}
