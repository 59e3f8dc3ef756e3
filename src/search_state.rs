//! The per-run mutable state of a search, stored parallel to the [`Grid`].

use crate::{Cost, Grid, GridError, Point, Result};

/// The `distance` of a Node that has not been reached (yet)
pub const UNREACHABLE: Cost = Cost::MAX;

/// The search fields of a single Node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
	/// the Cost from the start, or [`UNREACHABLE`]
	pub distance: Cost,
	/// the estimated Cost to the finish. `None` until the Node is first discovered
	pub heuristic: Option<Cost>,
	/// set once the Node is settled
	pub visited: bool,
	/// the predecessor on the best known Path to this Node
	pub previous: Option<Point>,
}

impl SearchNode {
	/// a Node at rest
	pub const RESET: SearchNode = SearchNode {
		distance: UNREACHABLE,
		heuristic: None,
		visited: false,
		previous: None,
	};
}

impl Default for SearchNode {
	fn default() -> SearchNode {
		SearchNode::RESET
	}
}

/// One [`SearchNode`] for every Node of a [`Grid`], in row-major order.
///
/// The Grid stays immutable while a search runs, all writes go here. This allows running
/// different searches over the same Grid at the same time, as long as each one owns its own
/// `SearchState`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
	rows: usize,
	cols: usize,
	start: Point,
	nodes: Vec<SearchNode>,
}

impl SearchState {
	/// Creates a State for `grid` that is ready for a search from `grid.start()`.
	pub fn new(grid: &Grid) -> SearchState {
		let mut state = SearchState {
			rows: grid.rows(),
			cols: grid.cols(),
			start: grid.start(),
			nodes: vec![SearchNode::RESET; grid.len()],
		};
		state[grid.start()].distance = 0;
		state
	}

	/// Puts every Node back to rest and sets the distance of `grid.start()` to `0`.
	///
	/// Has to be called before every search. If the dimensions of `grid` differ from the
	/// ones this State was created with, the State is resized.
	pub fn reset_for_run(&mut self, grid: &Grid) {
		self.reset(grid, grid.start());
	}

	/// Same as [`reset_for_run`](Self::reset_for_run), but prepares a search from `start`
	/// instead of the start stored in `grid`.
	///
	/// ## Examples
	/// ```
	/// use grid_search::{dijkstra, Grid, SearchState};
	///
	/// let grid = Grid::new(1, 3, (0, 1), (0, 2)).unwrap();
	/// let mut state = SearchState::new(&grid);
	///
	/// state.reset_from(&grid, (0, 0)).unwrap();
	/// let visited = dijkstra(&grid, &mut state, (0, 0), (0, 2)).unwrap();
	/// assert_eq!(visited, vec![(0, 0), (0, 1), (0, 2)]);
	/// ```
	///
	/// ## Errors
	/// [`GridError::OutOfBounds`] if `start` is not on the Grid. The State is left as it was.
	pub fn reset_from(&mut self, grid: &Grid, start: Point) -> Result<()> {
		grid.index_of(start)?;
		self.reset(grid, start);
		Ok(())
	}

	fn reset(&mut self, grid: &Grid, start: Point) {
		self.rows = grid.rows();
		self.cols = grid.cols();
		self.start = start;
		self.nodes.clear();
		self.nodes.resize(grid.len(), SearchNode::RESET);
		self[start].distance = 0;
	}

	/// `(rows, cols)` of the Grid this State belongs to
	pub fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// the Point this State was last reset for
	pub fn start(&self) -> Point {
		self.start
	}

	/// returns the SearchNode at `point`
	pub fn get(&self, point: Point) -> Result<&SearchNode> {
		let index = self.index_of(point)?;
		Ok(&self.nodes[index])
	}

	/// returns the SearchNode at `point`
	pub fn get_mut(&mut self, point: Point) -> Result<&mut SearchNode> {
		let index = self.index_of(point)?;
		Ok(&mut self.nodes[index])
	}

	fn index_of(&self, (row, col): Point) -> Result<usize> {
		if row < self.rows && col < self.cols {
			Ok(row * self.cols + col)
		} else {
			Err(GridError::OutOfBounds {
				point: (row, col),
				rows: self.rows,
				cols: self.cols,
			})
		}
	}
}

use std::ops::{Index, IndexMut};
impl Index<Point> for SearchState {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, (row, col): Point) -> &SearchNode {
		assert!(col < self.cols, "column {} out of bounds", col);
		&self.nodes[row * self.cols + col]
	}
}
impl IndexMut<Point> for SearchState {
	#[track_caller]
	fn index_mut(&mut self, (row, col): Point) -> &mut SearchNode {
		assert!(col < self.cols, "column {} out of bounds", col);
		&mut self.nodes[row * self.cols + col]
	}
}
