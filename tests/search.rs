use grid_search::prelude::*;
use grid_search::{compare, GridError, UNREACHABLE};
use nanorand::{Rng, WyRand};

use std::collections::VecDeque;

fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// a Grid with roughly `wall_percent` % walls. start and finish are never walls.
fn random_grid(rng: &mut WyRand, rows: usize, cols: usize, wall_percent: usize) -> Grid {
	let start = (rng.generate_range(0..rows), rng.generate_range(0..cols));
	let finish = (rng.generate_range(0..rows), rng.generate_range(0..cols));
	let mut grid = Grid::new(rows, cols, start, finish).unwrap();
	for row in 0..rows {
		for col in 0..cols {
			let point = (row, col);
			if point != start && point != finish && rng.generate_range(0..100) < wall_percent {
				grid.set_wall(point, true).unwrap();
			}
		}
	}
	grid
}

/// brute force shortest number of steps from start to finish
fn bfs(grid: &Grid) -> Option<usize> {
	let (rows, cols) = grid.dimensions();
	let start = grid.start();
	if grid[start].is_wall {
		return None;
	}
	let mut dist = vec![None; rows * cols];
	dist[start.0 * cols + start.1] = Some(0);
	let mut queue = VecDeque::from(vec![start]);
	while let Some((row, col)) = queue.pop_front() {
		let d = dist[row * cols + col].unwrap();
		if (row, col) == grid.finish() {
			return Some(d);
		}
		let mut next = vec![];
		if row > 0 {
			next.push((row - 1, col));
		}
		if row + 1 < rows {
			next.push((row + 1, col));
		}
		if col > 0 {
			next.push((row, col - 1));
		}
		if col + 1 < cols {
			next.push((row, col + 1));
		}
		for other in next {
			let index = other.0 * cols + other.1;
			if !grid[other].is_wall && dist[index].is_none() {
				dist[index] = Some(d + 1);
				queue.push_back(other);
			}
		}
	}
	None
}

fn assert_valid_path(grid: &Grid, path: &Path) {
	assert_eq!(path.start(), Some(grid.start()));
	assert_eq!(path.finish(), Some(grid.finish()));
	for point in path.iter() {
		assert!(!grid[*point].is_wall, "{} crosses a wall", path);
	}
	for pair in path.windows(2) {
		let (a, b) = (pair[0], pair[1]);
		assert_eq!(
			a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
			1,
			"{:?} and {:?} are not adjacent",
			a,
			b
		);
	}
}

fn assert_valid_order(grid: &Grid, visited: &[Point]) {
	let mut seen = vec![false; grid.len()];
	for &point in visited {
		assert!(!grid[point].is_wall, "settled wall {:?}", point);
		let index = grid.index_of(point).unwrap();
		assert!(!seen[index], "settled {:?} twice", point);
		seen[index] = true;
	}
}

#[test]
fn random_grids() {
	init();
	let mut rng = WyRand::new_seed(42);

	for _ in 0..300 {
		let rows = rng.generate_range(1..12);
		let cols = rng.generate_range(1..12);
		let wall_percent = rng.generate_range(0..45);
		let grid = random_grid(&mut rng, rows, cols, wall_percent);
		let expected = bfs(&grid);

		for algorithm in Algorithm::ALL {
			let solution = solve(&grid, algorithm).unwrap();
			assert_valid_order(&grid, &solution.visited);

			match (&solution.path, expected) {
				(Some(path), Some(steps)) => {
					assert_valid_path(&grid, path);
					if algorithm.is_optimal() {
						assert_eq!(path.cost(), steps, "{} on {:?}", algorithm, grid);
					} else {
						assert!(path.cost() >= steps);
					}
				}
				(None, None) => {
					assert!(!solution.visited.contains(&grid.finish()));
				}
				(path, expected) => {
					panic!("{}: found {:?}, expected {:?}", algorithm, path, expected)
				}
			}
		}
	}
}

#[test]
fn deterministic() {
	let mut rng = WyRand::new_seed(7);

	for _ in 0..50 {
		let grid = random_grid(&mut rng, 15, 20, 30);
		for algorithm in Algorithm::ALL {
			let first = solve(&grid, algorithm).unwrap();
			let second = solve(&grid, algorithm).unwrap();
			assert_eq!(first, second);
		}
	}
}

#[test]
fn reset_reproduces_run() {
	let mut rng = WyRand::new_seed(1234);
	let grid = random_grid(&mut rng, 20, 20, 25);
	let (start, finish) = (grid.start(), grid.finish());

	let mut state = SearchState::new(&grid);
	for algorithm in Algorithm::ALL {
		state.reset_for_run(&grid);
		let first = algorithm.traverse(&grid, &mut state, start, finish).unwrap();
		let first_path = reconstruct_path(&state, finish).unwrap();

		state.reset_for_run(&grid);
		let second = algorithm.traverse(&grid, &mut state, start, finish).unwrap();
		let second_path = reconstruct_path(&state, finish).unwrap();

		assert_eq!(first, second);
		assert_eq!(first_path, second_path);
	}
}

#[test]
fn distances_match_path() {
	let mut rng = WyRand::new_seed(99);

	for _ in 0..50 {
		let grid = random_grid(&mut rng, 10, 10, 20);
		for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
			let mut state = SearchState::new(&grid);
			let visited = algorithm
				.traverse(&grid, &mut state, grid.start(), grid.finish())
				.unwrap();

			// settled distances never decrease along the back-links
			for &point in visited.iter() {
				let node = state[point];
				assert_ne!(node.distance, UNREACHABLE);
				if let Some(prev) = node.previous {
					assert_eq!(state[prev].distance + 1, node.distance);
					assert!(state[prev].visited);
				}
			}
			if visited.last() == Some(&grid.finish()) {
				let path = reconstruct_path(&state, grid.finish()).unwrap();
				assert_eq!(path.cost(), state[grid.finish()].distance);
			}
		}
	}
}

#[test]
fn start_other_than_grid_start() {
	let mut rng = WyRand::new_seed(31);

	for _ in 0..50 {
		let grid = random_grid(&mut rng, 10, 10, 20);
		let start = (rng.generate_range(0..10), rng.generate_range(0..10));
		if grid[start].is_wall {
			continue;
		}
		let mut moved = grid.clone();
		moved.set_start(start).unwrap();
		let expected = bfs(&moved);

		let mut state = SearchState::new(&grid);
		for algorithm in Algorithm::ALL {
			state.reset_from(&grid, start).unwrap();
			let visited = algorithm
				.traverse(&grid, &mut state, start, grid.finish())
				.unwrap();
			assert_eq!(visited.first(), Some(&start));

			let reached = visited.last() == Some(&grid.finish());
			assert_eq!(reached, expected.is_some(), "{} from {:?}", algorithm, start);
			if reached {
				let path = reconstruct_path(&state, grid.finish()).unwrap();
				assert_valid_path(&moved, &path);
				if algorithm.is_optimal() {
					assert_eq!(Some(path.cost()), expected);
				}
			}
		}
	}
}

#[test]
fn empty_3x3() {
	let grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();

	let dijkstra = solve(&grid, Algorithm::Dijkstra).unwrap();
	assert_eq!(dijkstra.visited.len(), 9);
	assert_eq!(dijkstra.path.as_ref().unwrap().len(), 5);

	let a_star = solve(&grid, Algorithm::AStar).unwrap();
	assert!(a_star.visited.len() <= dijkstra.visited.len());
	assert!(a_star.visited.iter().all(|p| dijkstra.visited.contains(p)));
	assert_eq!(a_star.path.unwrap().cost(), 4);
}

#[test]
fn encircled_start() {
	// S # .
	// # # .
	// . . F
	let mut grid = Grid::with_walls(3, 3, (0, 0), (2, 2), [(0, 1), (1, 0), (1, 1)]).unwrap();
	for solution in compare(&grid).unwrap() {
		assert_eq!(solution.visited, vec![(0, 0)]);
		assert!(solution.path.is_none());
	}

	// open a single gap
	grid.toggle_wall((1, 0)).unwrap();
	for solution in compare(&grid).unwrap() {
		let path = solution.path.unwrap();
		assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
	}
}

#[test]
fn wall_on_finish() {
	let grid = Grid::with_walls(4, 4, (0, 0), (3, 3), [(3, 3)]).unwrap();
	for solution in compare(&grid).unwrap() {
		assert!(!solution.is_reached());
		// everything else was settled
		assert_eq!(solution.visited.len(), 15);
	}
}

#[test]
fn greedy_settles_fewer() {
	let grid = Grid::new(20, 50, (10, 15), (10, 35)).unwrap();
	let greedy = solve(&grid, Algorithm::GreedyBestFirst).unwrap();
	let a_star = solve(&grid, Algorithm::AStar).unwrap();
	let dijkstra = solve(&grid, Algorithm::Dijkstra).unwrap();

	assert_eq!(greedy.visited.len(), 21);
	assert!(a_star.visited.len() <= dijkstra.visited.len());
	assert_eq!(greedy.path.unwrap().cost(), 20);
	assert_eq!(a_star.path.unwrap().cost(), 20);
	assert_eq!(dijkstra.path.unwrap().cost(), 20);
}

#[test]
fn invalid_grids() {
	assert_eq!(
		Grid::new(0, 0, (0, 0), (0, 0)),
		Err(GridError::InvalidDimensions { rows: 0, cols: 0 })
	);

	let grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
	let mut state = SearchState::new(&grid);
	for algorithm in Algorithm::ALL {
		assert!(matches!(
			algorithm.traverse(&grid, &mut state, (3, 0), (2, 2)),
			Err(GridError::OutOfBounds { point: (3, 0), .. })
		));
	}

	let other = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
	let mut state = SearchState::new(&other);
	for algorithm in Algorithm::ALL {
		assert_eq!(
			algorithm.traverse(&grid, &mut state, (0, 0), (2, 2)),
			Err(GridError::StateMismatch {
				state: (2, 2),
				grid: (3, 3)
			})
		);
	}
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
	use grid_search::compare_parallel;

	let mut rng = WyRand::new_seed(5);
	for _ in 0..20 {
		let grid = random_grid(&mut rng, 30, 30, 30);
		assert_eq!(compare_parallel(&grid).unwrap(), compare(&grid).unwrap());
	}
}
