use crate::{Cost, Point, Result, SearchState};

/// A Path on the Grid
///
/// Stores the sequence of Points from start to finish in `path` and the number of steps in `cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
	path: Vec<Point>,
	cost: Cost,
}

impl Path {
	/// creates a new Path from a sequence of Points. Every step costs `1`.
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_search::Path;
	/// let path = Path::new(vec![(0, 0), (0, 1), (1, 1)]);
	///
	/// assert_eq!(path.cost(), 2);
	/// assert_eq!(path.len(), 3);
	/// ```
	pub fn new(path: Vec<Point>) -> Path {
		let cost = path.len().saturating_sub(1);
		Path { path, cost }
	}

	/// the number of steps
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the first Point of the Path
	pub fn start(&self) -> Option<Point> {
		self.path.first().copied()
	}

	/// the last Point of the Path
	pub fn finish(&self) -> Option<Point> {
		self.path.last().copied()
	}

	/// consumes the Path and returns the Points
	pub fn into_inner(self) -> Vec<Point> {
		self.path
	}
}

/// Walks the `previous` links of `state` back from `finish` and returns the Points in order from
/// the start of the search to `finish`.
///
/// If `finish` was never reached, the result only contains `finish` itself. The same happens when
/// `finish` is the start, so check the visitation order of the search to tell the two apart.
///
/// ## Examples
/// ```
/// use grid_search::{dijkstra, reconstruct_path, Grid, SearchState};
///
/// let grid = Grid::with_walls(1, 3, (0, 0), (0, 2), [(0, 1)]).unwrap();
/// let mut state = SearchState::new(&grid);
///
/// let visited = dijkstra(&grid, &mut state, grid.start(), grid.finish()).unwrap();
/// assert!(!visited.contains(&grid.finish()));
///
/// let path = reconstruct_path(&state, grid.finish()).unwrap();
/// assert_eq!(path, vec![(0, 2)]);
/// ```
///
/// ## Errors
/// [`GridError::OutOfBounds`](crate::GridError::OutOfBounds) if `finish` is not on the Grid.
pub fn reconstruct_path(state: &SearchState, finish: Point) -> Result<Path> {
	let mut current = finish;
	let mut steps = vec![current];
	while let Some(prev) = state.get(current)?.previous {
		steps.push(prev);
		current = prev;
	}
	steps.reverse();
	Ok(Path::new(steps))
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.path[index]
	}
}

impl Deref for Path {
	type Target = [Point];
	fn deref(&self) -> &[Point] {
		&self.path
	}
}

impl PartialEq<Vec<Point>> for Path {
	fn eq(&self, rhs: &Vec<Point>) -> bool {
		self.path == *rhs
	}
}

impl<'a> PartialEq<&'a [Point]> for Path {
	fn eq(&self, rhs: &&'a [Point]) -> bool {
		self.path == *rhs
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			let (row, col) = self.path[0];
			write!(fmt, "({}, {})", row, col)?;
			for (row, col) in self.path.iter().skip(1) {
				write!(fmt, " -> ({}, {})", row, col)?;
			}
			Ok(())
		}
	}
}
