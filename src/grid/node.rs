use crate::Point;

/// One Cell of the [`Grid`](crate::Grid).
///
/// Only holds the static classification of the Cell. Everything that changes during a search
/// lives in the [`SearchState`](crate::SearchState) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
	/// the row of the Node
	pub row: usize,
	/// the column of the Node
	pub col: usize,
	/// blocked Cells are never settled by any search
	pub is_wall: bool,
	/// `true` for exactly one Node of a Grid
	pub is_start: bool,
	/// `true` for exactly one Node of a Grid
	pub is_finish: bool,
}

impl Node {
	pub(crate) fn new((row, col): Point) -> Node {
		Node {
			row,
			col,
			is_wall: false,
			is_start: false,
			is_finish: false,
		}
	}

	/// the `(row, col)` Position of the Node
	pub fn pos(&self) -> Point {
		(self.row, self.col)
	}
}
