//! The three traversal strategies and their shared frontier.
//!
//! All searches follow the same contract: they take a [`Grid`], a freshly reset
//! [`SearchState`] and the start and finish Positions, and return every settled Point in the
//! order it was settled. Searches stop as soon as the finish is settled or the frontier runs
//! empty. Walls are never settled.
//!
//! The Path itself is not returned but left behind in the `previous` fields of the
//! [`SearchState`], use [`reconstruct_path`](crate::reconstruct_path) to extract it.

use crate::{reconstruct_path, Cost, Grid, GridError, Path, Point, Result, SearchState};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Checks that a search from `start` to `finish` may run on `grid` with `state`.
///
/// Runs before any write, so a rejected search leaves `state` untouched.
pub(crate) fn check_run(
	grid: &Grid,
	state: &SearchState,
	start: Point,
	finish: Point,
) -> Result<()> {
	grid.index_of(start)?;
	grid.index_of(finish)?;
	if state.dimensions() != grid.dimensions() {
		return Err(GridError::StateMismatch {
			state: state.dimensions(),
			grid: grid.dimensions(),
		});
	}
	if state.start() != start {
		return Err(GridError::StartMismatch {
			start,
			prepared: state.start(),
		});
	}
	Ok(())
}

mod dijkstra;
pub use self::dijkstra::dijkstra;

mod a_star;
pub use self::a_star::a_star;

mod greedy;
pub use self::greedy::greedy_best_first;

/// An entry of the frontier. Smaller `score` comes first, equal scores are taken in insertion
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Element {
	pub point: Point,
	pub score: Cost,
	seq: usize,
}
impl PartialOrd for Element {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Element {
	fn cmp(&self, rhs: &Self) -> Ordering {
		// BinaryHeap is a max-heap
		rhs.score
			.cmp(&self.score)
			.then_with(|| rhs.seq.cmp(&self.seq))
	}
}

/// A min-priority queue without decrease-key.
///
/// A Point may be pushed several times. Entries of Points that were settled in the meantime
/// are dropped when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
	heap: BinaryHeap<Element>,
	next_seq: usize,
}

impl Frontier {
	pub fn with_capacity(capacity: usize) -> Frontier {
		Frontier {
			heap: BinaryHeap::with_capacity(capacity),
			next_seq: 0,
		}
	}

	pub fn push(&mut self, point: Point, score: Cost) {
		self.heap.push(Element {
			point,
			score,
			seq: self.next_seq,
		});
		self.next_seq += 1;
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// Pops entries until one is found that may be settled.
	///
	/// Walls and already settled Points are discarded without contributing any neighbors.
	pub fn next_unsettled(&mut self, grid: &Grid, state: &SearchState) -> Option<Point> {
		while let Some(Element { point, .. }) = self.heap.pop() {
			if grid[point].is_wall {
				continue;
			}
			if state[point].visited {
				// stale entry
				continue;
			}
			return Some(point);
		}
		None
	}
}

/// The available traversal strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// uniform-cost search, see [`dijkstra`]
	Dijkstra,
	/// heuristic search, see [`a_star`]
	AStar,
	/// greedy best-first search, see [`greedy_best_first`]
	GreedyBestFirst,
}

impl Algorithm {
	/// all Algorithms, in a fixed order
	pub const ALL: [Algorithm; 3] = [
		Algorithm::Dijkstra,
		Algorithm::AStar,
		Algorithm::GreedyBestFirst,
	];

	/// `true` if the Algorithm always finds a shortest Path
	pub fn is_optimal(self) -> bool {
		!matches!(self, Algorithm::GreedyBestFirst)
	}

	/// Runs the Algorithm. See the [module documentation](self) for the contract.
	pub fn traverse(
		self,
		grid: &Grid,
		state: &mut SearchState,
		start: Point,
		finish: Point,
	) -> Result<Vec<Point>> {
		match self {
			Algorithm::Dijkstra => dijkstra(grid, state, start, finish),
			Algorithm::AStar => a_star(grid, state, start, finish),
			Algorithm::GreedyBestFirst => greedy_best_first(grid, state, start, finish),
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			Algorithm::Dijkstra => "Dijkstra",
			Algorithm::AStar => "A*",
			Algorithm::GreedyBestFirst => "Greedy Best-First Search",
		};
		fmt.write_str(name)
	}
}

/// The outcome of [`solve`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
	/// the Algorithm that was used
	pub algorithm: Algorithm,
	/// all settled Points, in the order they were settled
	pub visited: Vec<Point>,
	/// the Path from start to finish, if the finish was reached
	pub path: Option<Path>,
}

impl Solution {
	/// `true` if the finish was settled
	pub fn is_reached(&self) -> bool {
		self.path.is_some()
	}
}

/// Resets a new [`SearchState`], runs `algorithm` from the start to the finish of `grid` and
/// reconstructs the Path.
///
/// ## Examples
/// ```
/// use grid_search::{solve, Algorithm, Grid};
///
/// // S . .
/// // # # .
/// // F . .
/// let grid = Grid::with_walls(3, 3, (0, 0), (2, 0), [(1, 0), (1, 1)]).unwrap();
///
/// let solution = solve(&grid, Algorithm::Dijkstra).unwrap();
/// let path = solution.path.unwrap();
/// assert_eq!(path.cost(), 6);
/// assert_eq!(path[3], (1, 2));
///
/// let mut grid = grid;
/// grid.toggle_wall((1, 2)).unwrap();
/// let solution = solve(&grid, Algorithm::AStar).unwrap();
/// assert!(solution.path.is_none());
/// ```
pub fn solve(grid: &Grid, algorithm: Algorithm) -> Result<Solution> {
	#[cfg(feature = "log")]
	let timer = std::time::Instant::now();

	let (start, finish) = (grid.start(), grid.finish());
	let mut state = SearchState::new(grid);
	let visited = algorithm.traverse(grid, &mut state, start, finish)?;

	let path = if visited.last() == Some(&finish) {
		Some(reconstruct_path(&state, finish)?)
	} else {
		None
	};

	#[cfg(feature = "log")]
	log::debug!(
		"{}: settled {} nodes, path cost {:?}, took {:?}",
		algorithm,
		visited.len(),
		path.as_ref().map(Path::cost),
		timer.elapsed()
	);

	Ok(Solution {
		algorithm,
		visited,
		path,
	})
}

/// Runs every [`Algorithm`] on `grid`, in the order of [`Algorithm::ALL`].
pub fn compare(grid: &Grid) -> Result<Vec<Solution>> {
	Algorithm::ALL
		.iter()
		.map(|&algorithm| solve(grid, algorithm))
		.collect()
}

/// Same as [`compare`], but runs the Algorithms on the rayon thread pool.
///
/// Every run owns its own [`SearchState`], the Grid is only shared immutably.
#[cfg(feature = "parallel")]
pub fn compare_parallel(grid: &Grid) -> Result<Vec<Solution>> {
	use rayon::prelude::*;

	#[cfg(feature = "log")]
	let timer = std::time::Instant::now();

	let solutions = Algorithm::ALL
		.par_iter()
		.map(|&algorithm| solve(grid, algorithm))
		.collect();

	#[cfg(feature = "log")]
	log::debug!("compared all algorithms in {:?}", timer.elapsed());

	solutions
}
