use crate::{GridError, Point, PointSet, Result};

mod node;
pub use self::node::Node;

/// A rectangular Grid of `rows x cols` [`Node`]s, addressed by `(row, col)`.
///
/// The Grid only stores the static shape: which Cells are walls and where start and finish are.
/// The dimensions are fixed for the lifetime of the Grid. Searches never modify the Grid, they
/// write into a separate [`SearchState`](crate::SearchState).
///
/// ## Examples
/// Basic usage:
/// ```
/// use grid_search::Grid;
///
/// let mut grid = Grid::new(3, 4, (0, 0), (2, 3)).unwrap();
/// grid.toggle_wall((1, 1)).unwrap();
///
/// assert!(grid.node((1, 1)).unwrap().is_wall);
/// assert_eq!(grid.start(), (0, 0));
/// assert!(grid.node((4, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	rows: usize,
	cols: usize,
	nodes: Vec<Node>,
	start: Point,
	finish: Point,
}

impl Grid {
	/// Creates a new Grid without any walls.
	///
	/// ## Errors
	/// - [`GridError::InvalidDimensions`] if `rows` or `cols` is zero
	/// - [`GridError::OutOfBounds`] if `start` or `finish` are not on the Grid
	pub fn new(rows: usize, cols: usize, start: Point, finish: Point) -> Result<Grid> {
		if rows == 0 || cols == 0 {
			return Err(GridError::InvalidDimensions { rows, cols });
		}
		let mut nodes = Vec::with_capacity(rows * cols);
		for row in 0..rows {
			for col in 0..cols {
				nodes.push(Node::new((row, col)));
			}
		}
		let mut grid = Grid {
			rows,
			cols,
			nodes,
			start,
			finish,
		};
		grid.check(start)?;
		grid.check(finish)?;

		let start = grid.index_of(start)?;
		grid.nodes[start].is_start = true;
		let finish = grid.index_of(finish)?;
		grid.nodes[finish].is_finish = true;

		Ok(grid)
	}

	/// Creates a new Grid and marks every Point in `walls` as a wall.
	///
	/// ## Examples
	/// ```
	/// use grid_search::Grid;
	///
	/// let grid = Grid::with_walls(3, 3, (0, 0), (2, 2), [(0, 1), (1, 1)]).unwrap();
	/// assert_eq!(grid.walls().len(), 2);
	/// ```
	pub fn with_walls(
		rows: usize,
		cols: usize,
		start: Point,
		finish: Point,
		walls: impl IntoIterator<Item = Point>,
	) -> Result<Grid> {
		let mut grid = Grid::new(rows, cols, start, finish)?;
		for wall in walls {
			grid.set_wall(wall, true)?;
		}
		Ok(grid)
	}

	/// the number of rows
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// the number of columns
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// `(rows, cols)`
	pub fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// the number of Nodes in the Grid
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// always `false`, since a Grid has at least one Node
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// the Position of the start Node
	pub fn start(&self) -> Point {
		self.start
	}

	/// the Position of the finish Node
	pub fn finish(&self) -> Point {
		self.finish
	}

	/// checks if `point` lies on the Grid
	pub fn contains(&self, (row, col): Point) -> bool {
		row < self.rows && col < self.cols
	}

	/// the row-major index of `point`
	pub fn index_of(&self, point: Point) -> Result<usize> {
		self.check(point)?;
		Ok(point.0 * self.cols + point.1)
	}

	/// returns the Node at `point`
	pub fn node(&self, point: Point) -> Result<&Node> {
		let index = self.index_of(point)?;
		Ok(&self.nodes[index])
	}

	/// all Nodes in row-major order
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// checks if `point` is a wall
	pub fn is_wall(&self, point: Point) -> Result<bool> {
		self.node(point).map(|node| node.is_wall)
	}

	/// the Positions of all walls
	pub fn walls(&self) -> PointSet {
		self.nodes
			.iter()
			.filter(|node| node.is_wall)
			.map(Node::pos)
			.collect()
	}

	/// Flips the wall state of `point` and returns the new state.
	///
	/// Start and finish may be turned into walls as well, in which case no search will reach them.
	pub fn toggle_wall(&mut self, point: Point) -> Result<bool> {
		let index = self.index_of(point)?;
		let node = &mut self.nodes[index];
		node.is_wall = !node.is_wall;
		Ok(node.is_wall)
	}

	/// sets the wall state of `point`
	pub fn set_wall(&mut self, point: Point, is_wall: bool) -> Result<()> {
		let index = self.index_of(point)?;
		self.nodes[index].is_wall = is_wall;
		Ok(())
	}

	/// removes all walls from the Grid
	pub fn clear_walls(&mut self) {
		for node in self.nodes.iter_mut() {
			node.is_wall = false;
		}
	}

	/// Moves the start to `point`. The previous start Node loses its flag.
	pub fn set_start(&mut self, point: Point) -> Result<()> {
		let new = self.index_of(point)?;
		let old = self.index_of(self.start)?;
		self.nodes[old].is_start = false;
		self.nodes[new].is_start = true;
		self.start = point;
		Ok(())
	}

	/// Moves the finish to `point`. The previous finish Node loses its flag.
	pub fn set_finish(&mut self, point: Point) -> Result<()> {
		let new = self.index_of(point)?;
		let old = self.index_of(self.finish)?;
		self.nodes[old].is_finish = false;
		self.nodes[new].is_finish = true;
		self.finish = point;
		Ok(())
	}

	fn check(&self, point: Point) -> Result<()> {
		if self.contains(point) {
			Ok(())
		} else {
			Err(GridError::OutOfBounds {
				point,
				rows: self.rows,
				cols: self.cols,
			})
		}
	}
}

use std::ops::Index;
impl Index<Point> for Grid {
	type Output = Node;
	#[track_caller]
	fn index(&self, (row, col): Point) -> &Node {
		assert!(col < self.cols, "column {} out of bounds", col);
		&self.nodes[row * self.cols + col]
	}
}
