use super::{NodeArena, OpenElement, SearchNode};
use crate::utils::uniform;
use crate::{manhattan, Cost, GridMap, Path, Point};

use log::trace;
use nanorand::WyRand;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The Cost of moving between two adjacent cells.
const STEP_COST: Cost = 1.0;

/// The weights of the two terms of the secondary ranking.
///
/// A Node's rank is `1 - (direction * consistency + progress * (1 - g / (width + height)))`,
/// where `consistency` is `1.0` when the move that reached the Node points
/// straight at the goal. Lower ranks are expanded first within FOCAL, so large
/// `direction` favors goal-directed moves and large `progress` favors Nodes
/// deeper along their Path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankWeights {
    /// weight of the directional-consistency term
    pub direction: f64,
    /// weight of the path-progress term
    pub progress: f64,
}

impl Default for RankWeights {
    fn default() -> RankWeights {
        RankWeights {
            direction: 0.6,
            progress: 0.4,
        }
    }
}

/// The parameters of a single search invocation.
///
/// Every knob that [`generate_candidate_paths`](crate::generate_candidate_paths)
/// perturbs lives here, so a try is fully described by its `SearchParams` value
/// and nothing has to be restored afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParams {
    /// suboptimality slack: Nodes with `f <= (w + 1) * f_min` are eligible for
    /// rank-based expansion, and any returned Path costs at most `(w + 1)` times
    /// the optimum
    pub w: f64,
    /// weights of the secondary ranking
    pub weights: RankWeights,
    /// magnitude of the uniform noise added to every heuristic evaluation
    pub noise: f64,
    /// seed of the generator the noise is drawn from
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> SearchParams {
        SearchParams {
            w: 0.0,
            weights: RankWeights::default(),
            noise: 0.0,
            seed: 0,
        }
    }
}

/// A Focal Search engine over a shared [`GridMap`].
///
/// The engine itself is just the Grid and the parameters; all mutable search
/// state is created inside [`search_once`](FocalSearch::search_once) and dropped
/// when it returns.
#[derive(Clone, Copy, Debug)]
pub struct FocalSearch<'a> {
    grid: &'a GridMap,
    params: SearchParams,
}

impl<'a> FocalSearch<'a> {
    /// Creates an engine for the given Grid and parameters.
    pub fn new(grid: &'a GridMap, params: SearchParams) -> FocalSearch<'a> {
        FocalSearch { grid, params }
    }

    /// The parameters this engine searches with
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Runs one search from `start` to `goal`.
    ///
    /// The search keeps OPEN ordered by `f = g + h` (Manhattan heuristic) and
    /// expands the best-ranked Node among FOCAL, the unfinalized Nodes whose `f`
    /// lies within `(w + 1) * f_min`. When a cheaper way to a known Node is
    /// found, the Node is re-ranked and re-queued; the outdated OPEN entries
    /// stay behind and are dropped when they surface.
    ///
    /// ## Returns
    /// The Path from `start` to `goal` inclusive, or `None` if no Path exists.
    /// `None` is a legitimate outcome, not an error. `start == goal` yields the
    /// single-cell Path `[start]` with Cost `0`.
    ///
    /// ## Examples
    /// ```
    /// use focal_pathfinding::{FocalSearch, GridMap, SearchParams};
    ///
    /// let map = GridMap::new(3, 3, [(1, 1)]);
    /// let search = FocalSearch::new(&map, SearchParams::default());
    ///
    /// let path = search.search_once((0, 0), (2, 2)).unwrap();
    /// assert_eq!(path.len(), 5);
    ///
    /// // walling off the goal turns the same call into a failure
    /// let map = GridMap::new(3, 3, [(1, 2), (2, 1)]);
    /// let search = FocalSearch::new(&map, SearchParams::default());
    /// assert!(search.search_once((0, 0), (2, 2)).is_none());
    /// ```
    pub fn search_once(&self, start: Point, goal: Point) -> Option<Path> {
        if !self.grid.is_traversable(start) || !self.grid.is_traversable(goal) {
            return None;
        }
        if start == goal {
            return Some(Path::new(vec![start], 0.0));
        }

        let mut noise_rng = (self.params.noise > 0.0).then(|| WyRand::new_seed(self.params.seed));

        let size_hint = self.grid.width() * self.grid.height() / 4 + 1;
        let mut arena = NodeArena::with_capacity(size_hint);
        let mut open = BinaryHeap::with_capacity(size_hint / 2 + 1);

        let h = self.heuristic(start, goal, &mut noise_rng);
        let rank = self.rank(start, 0.0, None, goal);
        let start_id = arena.insert(SearchNode::new(start, 0.0, h, rank, None));
        open.push(OpenElement(start_id, arena[start_id].f, 0.0, 0));

        while let Some(&OpenElement(top_id, top_f, _, top_stamp)) = open.peek() {
            {
                let node = &arena[top_id];
                if node.visited || node.stamp != top_stamp {
                    open.pop();
                    continue;
                }
            }

            // Every unfinalized Node has exactly one current entry, so the live
            // top carries the minimum f over all of them.
            let f_min = top_f;
            let bound = (self.params.w + 1.0) * f_min;

            // FOCAL: current entries within the bound, picked by ascending rank.
            // The top itself qualifies, so there is always a candidate and every
            // loop iteration either pops an entry or finalizes a Node.
            let mut current_id = top_id;
            let mut best_rank = arena[top_id].rank;
            for &OpenElement(id, f, _, stamp) in open.iter() {
                if f > bound {
                    continue;
                }
                let node = &arena[id];
                if node.visited || node.stamp != stamp {
                    continue;
                }
                if node.rank < best_rank {
                    best_rank = node.rank;
                    current_id = id;
                }
            }

            let (current_pos, current_g) = {
                let node = &mut arena[current_id];
                node.visited = true;
                (node.pos, node.g)
            };

            if current_pos == goal {
                return Some(backtrack(&arena, current_id));
            }
            trace!(
                "expanding ({}, {}): f = {:.3}, bound = {:.3}",
                current_pos.0,
                current_pos.1,
                arena[current_id].f,
                bound
            );

            for next_pos in self.grid.neighbors(current_pos) {
                let tentative_g = current_g + STEP_COST;
                match arena.id_at(next_pos) {
                    None => {
                        let h = self.heuristic(next_pos, goal, &mut noise_rng);
                        let rank = self.rank(next_pos, tentative_g, Some(current_pos), goal);
                        let node = SearchNode::new(next_pos, tentative_g, h, rank, Some(current_id));
                        let f = node.f;
                        let id = arena.insert(node);
                        open.push(OpenElement(id, f, tentative_g, 0));
                    }
                    Some(id) => {
                        let node = &arena[id];
                        if node.visited || tentative_g >= node.g {
                            continue;
                        }
                        // a cheaper way to a known Node: re-rank and re-queue it,
                        // leaving the old entry to go stale
                        let h = self.heuristic(next_pos, goal, &mut noise_rng);
                        let rank = self.rank(next_pos, tentative_g, Some(current_pos), goal);
                        let node = &mut arena[id];
                        node.improve(tentative_g, h, rank, current_id);
                        open.push(OpenElement(id, node.f, tentative_g, node.stamp));
                    }
                }
            }
        }

        None
    }

    /// Manhattan distance, plus a uniform draw from `[-noise, noise]` per
    /// evaluation when noise is enabled.
    fn heuristic(&self, pos: Point, goal: Point, rng: &mut Option<WyRand>) -> Cost {
        let base = manhattan(pos, goal) as Cost;
        match rng {
            Some(rng) => base + uniform(rng, -self.params.noise, self.params.noise),
            None => base,
        }
    }

    /// The secondary ranking value of a Node reached from `came_from` with
    /// accumulated Cost `g`. Lower is better.
    fn rank(&self, pos: Point, g: Cost, came_from: Option<Point>, goal: Point) -> f64 {
        let consistency = match came_from {
            Some(prev) => {
                let step = (
                    pos.0 as isize - prev.0 as isize,
                    pos.1 as isize - prev.1 as isize,
                );
                let toward = (axis_sign(pos.0, goal.0), axis_sign(pos.1, goal.1));
                if step == toward {
                    1.0
                } else {
                    0.0
                }
            }
            None => 0.0,
        };
        let max_g = (self.grid.width() + self.grid.height()) as f64;
        let progress = if max_g > 0.0 { g / max_g } else { 0.0 };
        let weights = self.params.weights;
        1.0 - (weights.direction * consistency + weights.progress * (1.0 - progress))
    }
}

/// The direction of `to` relative to `from` along one axis: -1, 0 or 1.
fn axis_sign(from: usize, to: usize) -> isize {
    match from.cmp(&to) {
        Ordering::Less => 1,
        Ordering::Equal => 0,
        Ordering::Greater => -1,
    }
}

/// Collects the Path ending in `goal_id` by walking the parent chain backwards.
///
/// Parents only ever change to strictly cheaper predecessors, so the chain is a
/// tree and the walk terminates at the start Node.
fn backtrack(arena: &NodeArena, goal_id: super::NodeID) -> Path {
    let cost = arena[goal_id].g;
    let steps = {
        let mut steps = vec![];
        let mut current = Some(goal_id);

        while let Some(id) = current {
            steps.push(arena[id].pos);
            current = arena[id].parent;
        }
        steps.reverse();
        steps
    };

    Path::new(steps, cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_w(w: f64) -> SearchParams {
        SearchParams {
            w,
            ..SearchParams::default()
        }
    }

    #[test]
    fn optimal_on_open_grid() {
        let map = GridMap::new(7, 7, []);
        let search = FocalSearch::new(&map, SearchParams::default());

        for &(start, goal) in &[((0, 0), (6, 6)), ((3, 1), (0, 5)), ((6, 0), (0, 0))] {
            let path = search.search_once(start, goal).unwrap();
            assert_eq!(path.len(), manhattan(start, goal) + 1);
            assert_eq!(path[0], start);
            assert_eq!(path[path.len() - 1], goal);
        }
    }

    #[test]
    fn start_equals_goal() {
        let map = GridMap::new(4, 4, []);
        let search = FocalSearch::new(&map, SearchParams::default());

        let path = search.search_once((2, 2), (2, 2)).unwrap();
        assert_eq!(path, vec![(2, 2)]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn blocked_endpoints_fail() {
        let map = GridMap::new(4, 4, [(0, 0), (3, 3)]);
        let search = FocalSearch::new(&map, SearchParams::default());

        assert!(search.search_once((0, 0), (2, 2)).is_none());
        assert!(search.search_once((2, 2), (3, 3)).is_none());
    }

    #[test]
    fn routes_around_an_obstacle() {
        let map = GridMap::new(3, 3, [(1, 1)]);
        let search = FocalSearch::new(&map, SearchParams::default());

        let path = search.search_once((0, 0), (2, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert!(!path.points().contains(&(1, 1)));
    }

    #[test]
    fn unreachable_goal() {
        // a full wall across the third column
        let map = GridMap::new(5, 5, (0..5).map(|y| (2, y)));
        let search = FocalSearch::new(&map, params_with_w(2.0));

        assert!(search.search_once((0, 0), (4, 4)).is_none());
    }

    #[test]
    fn repeated_searches_are_identical() {
        let map = GridMap::new(9, 9, [(4, 4), (4, 5), (5, 4), (1, 7), (2, 7)]);
        let params = SearchParams {
            w: 1.5,
            noise: 0.01,
            seed: 99,
            ..SearchParams::default()
        };
        let search = FocalSearch::new(&map, params);

        let first = search.search_once((0, 0), (8, 8)).unwrap();
        let second = search.search_once((0, 0), (8, 8)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn loose_bound_still_reaches_the_goal() {
        let map = GridMap::new(6, 6, [(1, 1), (2, 2), (3, 3), (4, 4)]);
        let search = FocalSearch::new(&map, params_with_w(3.0));

        let path = search.search_once((0, 0), (5, 5)).unwrap();
        assert_eq!(path[0], (0, 0));
        assert_eq!(path[path.len() - 1], (5, 5));
        // unit steps: the Cost is exactly the move count
        assert_eq!(path.cost(), (path.len() - 1) as Cost);
    }
}
