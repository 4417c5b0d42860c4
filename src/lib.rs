#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to generate diverse near-optimal Paths on a Grid.
//!
//! ## Introduction
//! Regular A* returns exactly one Path, and on a Grid that Path is an arbitrary pick
//! among the many Paths sharing the same optimal Cost. Applications that want
//! alternatives to choose from (route suggestions, sampling-based planners, traffic
//! spreading) need a search that can produce *different* Paths between the same two
//! cells without giving up on quality.
//!
//! This crate implements Focal Search (also known as A*-epsilon), a
//! bounded-suboptimality variant of A*: the OPEN set keeps the usual ordering by
//! `f = g + h`, but expansion picks from FOCAL, the subset of OPEN whose `f` lies
//! within `(w + 1) * f_min`, re-ordered by a secondary ranking criterion. Any Path it
//! returns costs at most `(w + 1)` times the optimum, while the secondary criterion
//! decides *which* of the near-optimal Paths is found.
//!
//! On top of the single search, [`generate_candidate_paths`] runs the engine
//! repeatedly with a randomized suboptimality bound, randomized secondary-ranking
//! weights and a small amount of heuristic noise, and collects the distinct Paths
//! that fall out. All randomness comes from seedable generators passed in by the
//! caller, so a candidate set can be reproduced exactly.
//!
//! ## Examples
//! A single search on a small Grid:
//! ```
//! use focal_pathfinding::prelude::*;
//!
//! // 0 = free, 1 = wall
//! let grid = [
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 1, 0],
//!     [1, 1, 0, 1, 0],
//!     [0, 0, 0, 0, 0],
//! ];
//! let obstacles = (0..5)
//!     .flat_map(|y| (0..5).map(move |x| (x, y)))
//!     .filter(|&(x, y)| grid[y][x] == 1);
//! let map = GridMap::new(5, 5, obstacles);
//!
//! // the default parameters keep the bound tight, so the result is optimal
//! let search = FocalSearch::new(&map, SearchParams::default());
//! let path = search.search_once((0, 0), (4, 4)).unwrap();
//!
//! assert_eq!(path.len(), 9);
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[8], (4, 4));
//! ```
//!
//! Collecting multiple distinct candidates:
//! ```
//! use focal_pathfinding::prelude::*;
//! use nanorand::WyRand;
//!
//! let map = GridMap::new(8, 8, [(3, 3), (3, 4), (4, 3)]);
//!
//! let mut rng = WyRand::new_seed(42);
//! let paths = generate_candidate_paths(
//!     &map,
//!     (0, 0),
//!     (7, 7),
//!     &DiversifyConfig::default(),
//!     &mut rng,
//! );
//!
//! assert!(!paths.is_empty());
//! assert!(paths.len() <= DiversifyConfig::default().candidate_count);
//! ```
//!
//! ## Reproducibility
//! A [`FocalSearch`] with fixed [`SearchParams`] is fully deterministic, including
//! the heuristic noise, which is drawn from a generator seeded per invocation.
//! [`generate_candidate_paths`] takes the caller's generator by `&mut`, so re-running
//! with a generator seeded the same way yields the same candidate set.

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// The Cost of a Path. Steps between adjacent cells cost `1.0`, so a Path's Cost
/// equals its move count; the fractional part only carries heuristic noise during
/// a search.
pub type Cost = f64;

/// A HashMap keyed by [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

/// A HashSet of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

mod grid;
pub use grid::{manhattan, GridMap};

mod path;
pub use path::Path;

pub mod search;
pub use search::{FocalSearch, RankWeights, SearchParams};

mod diversify;
pub use diversify::{generate_candidate_paths, DiversifyConfig};

pub mod mapgen;
pub use mapgen::{MapGenError, ObstacleGenerator};

mod render;
pub use render::render_grid;

mod utils;

/// The most common imports
pub mod prelude {
    pub use crate::{
        generate_candidate_paths, manhattan, render_grid, Cost, DiversifyConfig, FocalSearch,
        GridMap, MapGenError, ObstacleGenerator, Path, Point, RankWeights, SearchParams,
    };
}
