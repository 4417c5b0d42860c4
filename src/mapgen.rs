//! Random obstacle layouts to build [`GridMap`](crate::GridMap)s from.
//!
//! The search core consumes a finished list of blocked coordinates; this module
//! produces such lists. Three modes are available: a fixed obstacle count, a
//! density converted into a count, and clustered blocks that mimic walls or
//! shelving. All modes keep the configured start and goal cells free and draw
//! from a caller-provided generator for reproducibility.
//!
//! ## Examples
//! ```
//! use focal_pathfinding::{GridMap, ObstacleGenerator};
//! use nanorand::WyRand;
//!
//! let generator = ObstacleGenerator::new(20, 20, (15, 18), (0, 4)).unwrap();
//! let mut rng = WyRand::new_seed(42);
//!
//! let obstacles = generator.generate_by_density(0.1, &mut rng).unwrap();
//! let map = GridMap::new(20, 20, obstacles);
//!
//! assert!(map.is_traversable((15, 18)));
//! assert!(map.is_traversable((0, 4)));
//! ```

use crate::{Point, PointSet};

use nanorand::{Rng, WyRand};
use std::fmt;

/// The reasons obstacle generation can be rejected.
///
/// All of these are configuration errors: they are returned immediately and
/// nothing is retried.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapGenError {
    /// a map dimension is zero
    InvalidDimensions {
        /// requested width
        width: usize,
        /// requested height
        height: usize,
    },
    /// the start or goal lies outside the map
    PointOutOfBounds {
        /// the offending coordinate
        point: Point,
        /// map width
        width: usize,
        /// map height
        height: usize,
    },
    /// more obstacles requested than free cells exist
    TooManyObstacles {
        /// requested obstacle count
        requested: usize,
        /// cells available after reserving start and goal
        available: usize,
    },
    /// a density outside `[0, 1]`
    InvalidDensity(f64),
    /// a zero cluster count or radius
    InvalidClusters {
        /// requested cluster count
        clusters: usize,
        /// requested cluster radius
        radius: usize,
    },
}

impl fmt::Display for MapGenError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MapGenError::InvalidDimensions { width, height } => {
                write!(fmt, "map dimensions must be positive, got {}x{}", width, height)
            }
            MapGenError::PointOutOfBounds {
                point,
                width,
                height,
            } => write!(
                fmt,
                "point ({}, {}) lies outside the {}x{} map",
                point.0, point.1, width, height
            ),
            MapGenError::TooManyObstacles {
                requested,
                available,
            } => write!(
                fmt,
                "{} obstacles requested but only {} cells are available",
                requested, available
            ),
            MapGenError::InvalidDensity(density) => {
                write!(fmt, "density must lie in [0, 1], got {}", density)
            }
            MapGenError::InvalidClusters { clusters, radius } => write!(
                fmt,
                "cluster count and radius must be positive, got {} clusters of radius {}",
                clusters, radius
            ),
        }
    }
}

impl std::error::Error for MapGenError {}

/// Samples obstacle positions for a map, keeping the start and goal cells free.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleGenerator {
    width: usize,
    height: usize,
    start: Point,
    goal: Point,
}

impl ObstacleGenerator {
    /// Creates a generator for a `width` x `height` map with fixed start and
    /// goal cells.
    ///
    /// ## Returns
    /// An error when a dimension is zero or an endpoint lies outside the map.
    pub fn new(
        width: usize,
        height: usize,
        start: Point,
        goal: Point,
    ) -> Result<ObstacleGenerator, MapGenError> {
        if width == 0 || height == 0 {
            return Err(MapGenError::InvalidDimensions { width, height });
        }
        for point in [start, goal] {
            if point.0 >= width || point.1 >= height {
                return Err(MapGenError::PointOutOfBounds {
                    point,
                    width,
                    height,
                });
            }
        }
        Ok(ObstacleGenerator {
            width,
            height,
            start,
            goal,
        })
    }

    /// Draws `count` distinct obstacle cells, uniformly over the map.
    pub fn generate(&self, count: usize, rng: &mut WyRand) -> Result<Vec<Point>, MapGenError> {
        let mut cells = self.free_cells();
        if count > cells.len() {
            return Err(MapGenError::TooManyObstacles {
                requested: count,
                available: cells.len(),
            });
        }
        // partial Fisher-Yates: after `count` swaps the prefix is a uniform
        // sample without replacement
        for i in 0..count {
            let j = i + rng.generate_range(0..cells.len() - i);
            cells.swap(i, j);
        }
        cells.truncate(count);
        Ok(cells)
    }

    /// Converts a density in `[0, 1]` into an obstacle count and samples it.
    pub fn generate_by_density(
        &self,
        density: f64,
        rng: &mut WyRand,
    ) -> Result<Vec<Point>, MapGenError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(MapGenError::InvalidDensity(density));
        }
        let count = (self.max_obstacles() as f64 * density) as usize;
        self.generate(count, rng)
    }

    /// Grows square obstacle blocks around random cluster centers, topping up
    /// with uniform samples when the clusters alone fall short of `count`.
    ///
    /// Each cluster covers the cells within `radius` of its center along both
    /// axes, clipped at the map border and at the start/goal cells.
    pub fn generate_clustered(
        &self,
        count: usize,
        clusters: usize,
        radius: usize,
        rng: &mut WyRand,
    ) -> Result<Vec<Point>, MapGenError> {
        if clusters == 0 || radius == 0 {
            return Err(MapGenError::InvalidClusters { clusters, radius });
        }
        let free = self.free_cells();
        if count > free.len() {
            return Err(MapGenError::TooManyObstacles {
                requested: count,
                available: free.len(),
            });
        }

        let centers = self.generate(clusters, rng)?;
        let mut obstacles: Vec<Point> = Vec::with_capacity(count);
        let mut taken = PointSet::default();
        let reach = radius as isize;

        'grow: for (cx, cy) in centers {
            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    let (x, y) = (cx as isize + dx, cy as isize + dy);
                    if x < 0 || y < 0 {
                        continue;
                    }
                    let cell = (x as usize, y as usize);
                    if cell.0 >= self.width || cell.1 >= self.height {
                        continue;
                    }
                    if cell == self.start || cell == self.goal {
                        continue;
                    }
                    if taken.insert(cell) {
                        obstacles.push(cell);
                        if obstacles.len() == count {
                            break 'grow;
                        }
                    }
                }
            }
        }

        // the clusters overlapped or got clipped: fill the remainder uniformly
        if obstacles.len() < count {
            let mut rest: Vec<Point> = free.into_iter().filter(|p| !taken.contains(p)).collect();
            let missing = count - obstacles.len();
            for i in 0..missing {
                let j = i + rng.generate_range(0..rest.len() - i);
                rest.swap(i, j);
            }
            obstacles.extend(rest.into_iter().take(missing));
        }

        Ok(obstacles)
    }

    fn free_cells(&self) -> Vec<Point> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&p| p != self.start && p != self.goal)
            .collect()
    }

    fn max_obstacles(&self) -> usize {
        let reserved = if self.start == self.goal { 1 } else { 2 };
        (self.width * self.height).saturating_sub(reserved)
    }
}
