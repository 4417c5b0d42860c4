use crate::{Cost, Point};

use std::sync::Arc;

/// A finished Path: the sequence of cells from start to goal, plus its Cost.
///
/// The cells are stored in a shared allocation, so cloning a Path is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    steps: Arc<[Point]>,
    cost: Cost,
}

impl Path {
    /// Creates a Path from the cells it visits and its total Cost.
    pub fn new(steps: Vec<Point>, cost: Cost) -> Path {
        Path {
            steps: steps.into(),
            cost,
        }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of cells on the Path, including both endpoints
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the Path contains no cells
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The cells of the Path, in walking order
    pub fn points(&self) -> &[Point] {
        &self.steps
    }

    /// Returns an Iterator over the cells of the Path
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }
}

use std::ops::Index;

impl Index<usize> for Path {
    type Output = Point;
    fn index(&self, index: usize) -> &Point {
        &self.steps[index]
    }
}

impl PartialEq<Vec<Point>> for Path {
    fn eq(&self, rhs: &Vec<Point>) -> bool {
        self.points() == rhs.as_slice()
    }
}

use std::fmt;

impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.steps.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "({}, {})", self.steps[0].0, self.steps[0].1)?;
            for p in self.steps.iter().skip(1) {
                write!(fmt, " -> ({}, {})", p.0, p.1)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn index() {
        let path = Path::new(vec![(4, 0), (4, 1), (3, 1)], 2.0);

        assert_eq!(path[0], (4, 0));
        assert_eq!(path[1], (4, 1));
        assert_eq!(path[2], (3, 1));
    }

    #[test]
    fn display() {
        let path = Path::new(vec![(4, 0), (4, 1), (3, 1)], 2.0);

        assert_eq!(
            &format!("{}", path),
            "Path[Cost = 2]: (4, 0) -> (4, 1) -> (3, 1)"
        );
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::new(), 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
