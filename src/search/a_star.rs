use super::{check_run, Frontier};
use crate::{
	neighbors::{unvisited_neighbors, ManhattanNeighborhood, Neighborhood},
	Grid, Point, Result, SearchState, UNREACHABLE,
};

/// Searches the Grid using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Nodes are settled by increasing `distance + heuristic`, where the heuristic is the Manhattan
/// distance to `finish`. The heuristic of a Node is calculated once, when the Node is first
/// discovered. Since the Manhattan distance never overestimates the number of steps on a Grid
/// without diagonal movement, the first time `finish` is settled its distance is minimal.
///
/// Ties are broken like in [`dijkstra`](crate::dijkstra): first discovered, first settled.
///
/// `state` has to be reset for `grid` and `start` (see [`SearchState::reset_for_run`] and
/// [`SearchState::reset_from`]).
///
/// ## Examples
/// ```
/// use grid_search::{a_star, dijkstra, Grid, SearchState};
///
/// let grid = Grid::new(5, 5, (2, 0), (2, 4)).unwrap();
///
/// let mut state = SearchState::new(&grid);
/// let a_star_visited = a_star(&grid, &mut state, grid.start(), grid.finish()).unwrap();
///
/// state.reset_for_run(&grid);
/// let dijkstra_visited = dijkstra(&grid, &mut state, grid.start(), grid.finish()).unwrap();
///
/// assert_eq!(a_star_visited, vec![(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
/// assert!(a_star_visited.len() < dijkstra_visited.len());
/// ```
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
pub fn a_star(
	grid: &Grid,
	state: &mut SearchState,
	start: Point,
	finish: Point,
) -> Result<Vec<Point>> {
	check_run(grid, state, start, finish)?;

	let neighborhood = ManhattanNeighborhood::from(grid);
	let mut visited = vec![];
	let mut next = Frontier::with_capacity(grid.len() / 2);

	let heuristic = neighborhood.heuristic(start, finish);
	state[start].heuristic = Some(heuristic);
	next.push(start, heuristic);

	let mut all_neighbors = vec![];

	while let Some(current_id) = next.next_unsettled(grid, state) {
		let current_cost = state[current_id].distance;
		if current_cost == UNREACHABLE {
			#[cfg(feature = "log")]
			log::trace!("a_star: remaining frontier is unreachable");
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
				let heuristic = *other
					.heuristic
					.get_or_insert_with(|| neighborhood.heuristic(other_id, finish));
				other.distance = other_cost;
				other.previous = Some(current_id);
				next.push(other_id, other_cost + heuristic);
			}
		}
	}

	Ok(visited)
}
