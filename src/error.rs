//! Errors raised when building or addressing a [`Grid`](crate::Grid)

use crate::Point;

/// Errors that can occur when constructing a Grid or accessing one of its Nodes.
///
/// An unreachable finish is **not** an error: it shows up as a visitation order that never
/// contains the finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
	/// A Grid was requested with zero rows or zero columns.
	#[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
	InvalidDimensions {
		/// requested number of rows
		rows: usize,
		/// requested number of columns
		cols: usize,
	},

	/// A Point outside of `[0, rows) x [0, cols)` was accessed.
	#[error("point {point:?} is outside of the {rows}x{cols} grid")]
	OutOfBounds {
		/// the offending (row, col)
		point: Point,
		/// number of rows of the Grid
		rows: usize,
		/// number of columns of the Grid
		cols: usize,
	},

	/// A [`SearchState`](crate::SearchState) was used with a Grid of different dimensions.
	#[error("search state of dimensions {state:?} does not match grid dimensions {grid:?}")]
	StateMismatch {
		/// `(rows, cols)` of the SearchState
		state: (usize, usize),
		/// `(rows, cols)` of the Grid
		grid: (usize, usize),
	},

	/// A search was started from a Point the [`SearchState`](crate::SearchState) was not reset
	/// for.
	#[error("search state was reset for start {prepared:?}, not {start:?}")]
	StartMismatch {
		/// the start passed to the search
		start: Point,
		/// the start the SearchState was reset for
		prepared: Point,
	},
}

/// Shorthand for results carrying a [`GridError`]
pub type Result<T> = std::result::Result<T, GridError>;
