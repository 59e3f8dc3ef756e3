//! Which Cells are reachable in one step, and how far away the finish is

use crate::{Cost, Grid, Point, SearchState};
use std::fmt::Debug;

/// Defines how a search can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a Heuristic
/// for how long it might take to reach a goal from a Point.
///
/// The searches of this crate use [`ManhattanNeighborhood`], since steps are only allowed along
/// the 4 axis-aligned directions.
pub trait Neighborhood: Clone + Debug {
	/// Provides a list of Neighbors of a Point that lie on the Grid, in a fixed order.
	///
	/// Note that it is not necessary to check weather the Tile at a Point is a wall or not.
	/// That check is done when the Point is taken from the frontier.
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
	/// Gives a Heuristic for how long it takes to reach `goal` from `point`.
	///
	/// This must never overestimate the actual Cost, otherwise A* loses its guarantee of
	/// returning the shortest Path.
	fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// Neighbors are always returned in the order north, south, west, east.
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	rows: usize,
	cols: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, cols }
	}
}

impl From<&Grid> for ManhattanNeighborhood {
	fn from(grid: &Grid) -> ManhattanNeighborhood {
		ManhattanNeighborhood::new(grid.rows(), grid.cols())
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		let (rows, cols) = (self.rows, self.cols);

		// north, south, west, east
		let iter = [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
			.iter()
			.map(move |(dr, dc)| (point.0 as isize + dr, point.1 as isize + dc))
			.filter(move |(r, c)| *r >= 0 && *c >= 0 && (*r as usize) < rows && (*c as usize) < cols)
			.map(|(r, c)| (r as usize, c as usize));

		Box::new(iter)
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
	}
}

/// The neighbors of `point` that are not settled yet, in the order given by `neighborhood`.
///
/// Walls are **not** filtered out.
pub fn unvisited_neighbors<'a, N: Neighborhood>(
	neighborhood: &N,
	state: &'a SearchState,
	point: Point,
) -> impl Iterator<Item = Point> + 'a {
	neighborhood
		.get_all_neighbors(point)
		.filter(move |&other| !state[other].visited)
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((2, 2)).collect::<Vec<_>>(),
		vec![(1, 2), (3, 2), (2, 1), (2, 3)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(1, 2), (0, 1), (0, 3)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
		vec![(3, 4), (4, 3)],
	);
}

#[test]
fn test_manhattan_single_cell() {
	let neighborhood = ManhattanNeighborhood::new(1, 1);
	assert_eq!(neighborhood.get_all_neighbors((0, 0)).count(), 0);
}

#[test]
fn test_manhattan_heuristic() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
	assert_eq!(neighborhood.heuristic((0, 4), (2, 1)), 2 + 3);
}

#[test]
fn test_unvisited_neighbors() {
	let grid = Grid::with_walls(3, 3, (0, 0), (2, 2), [(1, 2)]).unwrap();
	let mut state = SearchState::new(&grid);
	state[(0, 1)].visited = true;

	let neighborhood = ManhattanNeighborhood::from(&grid);
	assert_eq!(
		unvisited_neighbors(&neighborhood, &state, (1, 1)).collect::<Vec<_>>(),
		vec![(2, 1), (1, 0), (1, 2)],
	);
}
