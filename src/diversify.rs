//! Collecting multiple distinct candidate Paths between the same two cells.

use crate::utils::uniform;
use crate::{FocalSearch, GridMap, Path, Point, RankWeights, SearchParams};

use hashbrown::HashSet;
use log::{debug, trace};
use nanorand::{Rng, WyRand};

/// Controls for [`generate_candidate_paths`].
///
/// The defaults aim for a handful of visibly different Paths on medium-sized
/// Grids; widen `[w_min, w_max]` or raise `max_tries` when the candidates come
/// out too similar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiversifyConfig {
    /// how many distinct Paths to collect before stopping
    pub candidate_count: usize,
    /// upper limit of search attempts
    pub max_tries: usize,
    /// lower end of the suboptimality slack drawn per try
    pub w_min: f64,
    /// upper end of the suboptimality slack drawn per try
    pub w_max: f64,
    /// magnitude of the heuristic noise applied during every try
    pub noise_strength: f64,
}

impl Default for DiversifyConfig {
    fn default() -> DiversifyConfig {
        DiversifyConfig {
            candidate_count: 3,
            max_tries: 20,
            w_min: 1.0,
            w_max: 3.0,
            noise_strength: 0.01,
        }
    }
}

/// Collects up to `candidate_count` distinct Paths from `start` to `goal`.
///
/// Every try runs one [`FocalSearch`] with freshly drawn parameters: the
/// suboptimality slack uniform in `[w_min, w_max]`, the directional-consistency
/// weight uniform in `[0.3, 0.9]` (the progress weight is its complement), and a
/// new seed for the per-evaluation heuristic noise. Paths are deduplicated by
/// their exact cell sequence and kept in discovery order.
///
/// All randomness comes from `rng`, so a seeded generator reproduces the same
/// candidate set.
///
/// ## Returns
/// At most `candidate_count` Paths; fewer (possibly none) when `max_tries`
/// searches did not produce enough distinct results. An unreachable goal always
/// yields an empty list. Hitting `candidate_count` is best-effort: that many
/// distinct Paths may simply not exist.
pub fn generate_candidate_paths(
    grid: &GridMap,
    start: Point,
    goal: Point,
    config: &DiversifyConfig,
    rng: &mut WyRand,
) -> Vec<Path> {
    let mut candidates = Vec::new();
    let mut seen: HashSet<Vec<Point>> = HashSet::new();

    let mut tries = 0;
    for try_index in 0..config.max_tries {
        if candidates.len() >= config.candidate_count {
            break;
        }
        tries += 1;

        let w = uniform(rng, config.w_min, config.w_max);
        let direction = uniform(rng, 0.3, 0.9);
        let params = SearchParams {
            w,
            weights: RankWeights {
                direction,
                progress: 1.0 - direction,
            },
            noise: config.noise_strength,
            seed: rng.generate::<u64>(),
        };

        let Some(path) = FocalSearch::new(grid, params).search_once(start, goal) else {
            trace!("try {}: no path (w = {:.3})", try_index, w);
            continue;
        };
        if seen.insert(path.points().to_vec()) {
            debug!(
                "try {}: new candidate with {} cells (w = {:.3}, direction weight = {:.3})",
                try_index,
                path.len(),
                w,
                direction
            );
            candidates.push(path);
        } else {
            trace!("try {}: duplicate of a known candidate", try_index);
        }
    }

    debug!(
        "collected {} of {} candidates in {} tries",
        candidates.len(),
        config.candidate_count,
        tries
    );
    candidates
}
