#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find and compare Paths on a uniform Grid.
//!
//! ## Introduction
//! The Grid is a rectangle of Cells that are either passable or walls. Every step between two
//! axis-aligned neighbors costs `1`, there is no diagonal movement. One Cell is the start, one is
//! the finish.
//!
//! Three search strategies are provided, all with the same contract:
//! - [`dijkstra`]: uniform-cost search. Settles Cells by increasing distance from the start and
//!   always finds a shortest Path.
//! - [`a_star`]: adds the Manhattan distance to the finish as a Heuristic. Still finds a shortest
//!   Path, usually while settling fewer Cells.
//! - [`greedy_best_first`]: only looks at the Heuristic. Settles very few Cells in open areas,
//!   but the Path may be longer than necessary.
//!
//! Every search returns the Cells in the order they were settled, which is what a visualizer
//! needs to play back the search. The Path is left behind as back-links in the [`SearchState`]
//! and extracted with [`reconstruct_path`].
//!
//! All searches are deterministic: Neighbors are always discovered in the order north, south,
//! west, east, and of several Cells with the same priority the one discovered first is settled
//! first.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use grid_search::Grid;
//!
//! // S . . # .
//! // . # . # .
//! // . # . . F
//! let grid = Grid::with_walls(
//!     3, 5,                             // the size of the Grid
//!     (0, 0),                           // start
//!     (2, 4),                           // finish
//!     [(1, 1), (2, 1), (0, 3), (1, 3)], // walls
//! )
//! .unwrap();
//! ```
//! The Grid only stores the static shape. Searches write into a separate [`SearchState`],
//! which has to be reset before every run:
//! ```
//! # use grid_search::Grid;
//! # let grid = Grid::with_walls(3, 5, (0, 0), (2, 4), [(1, 1), (2, 1), (0, 3), (1, 3)]).unwrap();
//! use grid_search::{a_star, reconstruct_path, SearchState};
//!
//! let mut state = SearchState::new(&grid);
//! let visited = a_star(&grid, &mut state, grid.start(), grid.finish()).unwrap();
//!
//! // the finish was reached if it was settled
//! assert_eq!(visited.last(), Some(&grid.finish()));
//!
//! let path = reconstruct_path(&state, grid.finish()).unwrap();
//! assert_eq!(path.cost(), 6);
//!
//! // reuse the State for the next run
//! state.reset_for_run(&grid);
//! ```
//!
//! ### Solving
//! [`solve`] bundles these steps for the start and finish stored in the Grid:
//! ```
//! # use grid_search::Grid;
//! # let grid = Grid::with_walls(3, 5, (0, 0), (2, 4), [(1, 1), (2, 1), (0, 3), (1, 3)]).unwrap();
//! use grid_search::{solve, compare, Algorithm};
//!
//! let solution = solve(&grid, Algorithm::GreedyBestFirst).unwrap();
//! assert!(solution.is_reached());
//!
//! for solution in compare(&grid).unwrap() {
//!     println!("{}: {} settled", solution.algorithm, solution.visited.len());
//! }
//! ```
//!
//! ### Editing
//! Walls, start and finish can be changed at any time between two searches:
//! ```
//! # use grid_search::Grid;
//! # let mut grid = Grid::with_walls(3, 5, (0, 0), (2, 4), [(1, 1), (2, 1), (0, 3), (1, 3)]).unwrap();
//! use grid_search::{solve, Algorithm};
//!
//! grid.toggle_wall((2, 3)).unwrap();
//! assert!(!solve(&grid, Algorithm::Dijkstra).unwrap().is_reached());
//!
//! grid.set_finish((0, 2)).unwrap();
//! assert!(solve(&grid, Algorithm::Dijkstra).unwrap().is_reached());
//!
//! grid.clear_walls();
//! assert!(grid.walls().is_empty());
//! ```
//!
//! ## Features
//! - `parallel` (default): enables [`compare_parallel`] using `rayon`
//! - `log`: logs timings of the searches through the `log` crate

/// A shorthand for Points on the grid: `(row, col)`
pub type Point = (usize, usize);

/// The Cost of a Path, which is the number of steps
pub type Cost = usize;

/// A set of Points
pub type PointSet = hashbrown::HashSet<Point>;

mod error;
pub use self::error::{GridError, Result};

mod grid;
pub use self::grid::{Grid, Node};

mod search_state;
pub use self::search_state::{SearchNode, SearchState, UNREACHABLE};

pub mod neighbors;

mod path;
pub use self::path::{reconstruct_path, Path};

mod search;
#[cfg(feature = "parallel")]
pub use self::search::compare_parallel;
pub use self::search::{
	a_star, compare, dijkstra, greedy_best_first, solve, Algorithm, Solution,
};

/// The most commonly used types and functions
pub mod prelude {
	pub use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
	pub use crate::{
		a_star, dijkstra, greedy_best_first, reconstruct_path, solve, Algorithm, Grid, Path,
		Point, SearchState, Solution,
	};
}
