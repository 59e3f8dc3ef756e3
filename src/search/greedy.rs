use super::{check_run, Frontier};
use crate::{
	neighbors::{unvisited_neighbors, ManhattanNeighborhood, Neighborhood},
	Grid, Point, Result, SearchState,
};

/// Searches the Grid using [Greedy Best-First Search](https://en.wikipedia.org/wiki/Best-first_search).
///
/// Nodes are settled by increasing Manhattan distance to `finish` alone, the distance already
/// walked is ignored. This usually settles far fewer Nodes than [`a_star`](crate::a_star), but the
/// Path found is not necessarily the shortest one.
///
/// A Node keeps the predecessor it was first discovered from. Nodes are never pushed to the
/// frontier twice. The `distance` fields of `state` are left untouched.
///
/// `state` has to be reset for `grid` and `start` (see [`SearchState::reset_for_run`] and
/// [`SearchState::reset_from`]).
///
/// ## Examples
/// ```
/// use grid_search::{greedy_best_first, reconstruct_path, Grid, SearchState};
///
/// // . . . .
/// // S # . F
/// let grid = Grid::with_walls(2, 4, (1, 0), (1, 3), [(1, 1)]).unwrap();
/// let mut state = SearchState::new(&grid);
///
/// let visited = greedy_best_first(&grid, &mut state, grid.start(), grid.finish()).unwrap();
/// assert_eq!(visited.last(), Some(&grid.finish()));
///
/// let path = reconstruct_path(&state, grid.finish()).unwrap();
/// assert_eq!(path, vec![(1, 0), (0, 0), (0, 1), (0, 2), (1, 2), (1, 3)]);
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
pub fn greedy_best_first(
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
		state[current_id].visited = true;
		visited.push(current_id);

		if current_id == finish {
			break;
		}

		all_neighbors.clear();
		all_neighbors.extend(unvisited_neighbors(&neighborhood, state, current_id));
		for &other_id in all_neighbors.iter() {
			let other = &mut state[other_id];
			if other.heuristic.is_some() {
				// already discovered, the first predecessor stays
				continue;
			}
			let heuristic = neighborhood.heuristic(other_id, finish);
			other.heuristic = Some(heuristic);
			other.previous = Some(current_id);
			next.push(other_id, heuristic);
		}
	}

	#[cfg(feature = "log")]
	if visited.last() != Some(&finish) {
		log::trace!("greedy_best_first: frontier exhausted before reaching {:?}", finish);
	}

	Ok(visited)
}
