use crate::{GridMap, Path, Point, PointSet};

/// Renders a Grid as text, one row per line with `y` growing downward.
///
/// `.` marks free cells, `#` blocked cells, `S` and `G` the endpoints, and `*`
/// the cells of `path` (endpoints keep their letters). Only traversability and
/// the finished cell list are consulted, so any Path from any search can be
/// drawn.
///
/// ## Examples
/// ```
/// use focal_pathfinding::prelude::*;
///
/// let map = GridMap::new(3, 3, [(1, 1)]);
/// let search = FocalSearch::new(&map, SearchParams::default());
/// let path = search.search_once((0, 0), (2, 2)).unwrap();
///
/// let text = render_grid(&map, (0, 0), (2, 2), Some(&path));
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.contains('S') && text.contains('G') && text.contains('#'));
/// ```
pub fn render_grid(grid: &GridMap, start: Point, goal: Point, path: Option<&Path>) -> String {
    let on_path: PointSet = path
        .map(|path| path.iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = (x, y);
            let glyph = if cell == start {
                'S'
            } else if cell == goal {
                'G'
            } else if !grid.is_traversable(cell) {
                '#'
            } else if on_path.contains(&cell) {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
