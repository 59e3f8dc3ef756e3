use super::{check_run, Frontier};
use crate::{
	neighbors::{unvisited_neighbors, ManhattanNeighborhood},
	Grid, Point, Result, SearchState, UNREACHABLE,
};

/// Searches the Grid using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// (uniform-cost search).
///
/// Nodes are settled by increasing distance from `start`. Among Nodes with the same distance,
/// the one that was discovered first is settled first, and Neighbors are discovered in the order
/// north, south, west, east.
///
/// `state` has to be reset for `grid` and `start` (see [`SearchState::reset_for_run`] and
/// [`SearchState::reset_from`]).
///
/// ## Examples
/// ```
/// use grid_search::{dijkstra, reconstruct_path, Grid, SearchState};
///
/// let grid = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
/// let mut state = SearchState::new(&grid);
///
/// let visited = dijkstra(&grid, &mut state, grid.start(), grid.finish()).unwrap();
/// assert_eq!(visited, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
///
/// let path = reconstruct_path(&state, grid.finish()).unwrap();
/// assert_eq!(path, vec![(0, 0), (1, 0), (1, 1)]);
/// ```
///
/// ## Returns
/// all settled Points in the order they were settled. The last element is `finish` if and only if
/// `finish` was reached.
///
/// ## Errors
/// - [`GridError::OutOfBounds`](crate::GridError::OutOfBounds) if `start` or `finish` are not
///   on the Grid
/// - [`GridError::StateMismatch`](crate::GridError::StateMismatch) if `state` belongs to a Grid
///   of other dimensions
/// - [`GridError::StartMismatch`](crate::GridError::StartMismatch) if `state` was not reset for
///   `start`
///
/// `state` is not modified when an error is returned.
pub fn dijkstra(
	grid: &Grid,
	state: &mut SearchState,
	start: Point,
	finish: Point,
) -> Result<Vec<Point>> {
	check_run(grid, state, start, finish)?;

	let neighborhood = ManhattanNeighborhood::from(grid);
	let mut visited = vec![];
	let mut next = Frontier::with_capacity(grid.len() / 2);
	next.push(start, 0);

	let mut all_neighbors = vec![];

	while let Some(current_id) = next.next_unsettled(grid, state) {
		let current_cost = state[current_id].distance;
		if current_cost == UNREACHABLE {
			#[cfg(feature = "log")]
			log::trace!("dijkstra: remaining frontier is unreachable");
			break;
		}

		state[current_id].visited = true;
		visited.push(current_id);

		if current_id == finish {
			break;
		}

		let other_cost = current_cost + 1;

		all_neighbors.clear();
		all_neighbors.extend(unvisited_neighbors(&neighborhood, state, current_id));
		for &other_id in all_neighbors.iter() {
			let other = &mut state[other_id];
			if other_cost < other.distance {
				other.distance = other_cost;
				other.previous = Some(current_id);
				next.push(other_id, other_cost);
			}
		}
	}

	Ok(visited)
}
