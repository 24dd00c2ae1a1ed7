use super::geometry::Position;

/// Session-unique identity of a node, independent of its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	pub id: PointId,
	pub pos: Position,
}

/// Undirected edge between two distinct nodes.
///
/// Equality ignores endpoint order: `Connection::new(a, b) == Connection::new(b, a)`.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Connection {
	pub p1: PointId,
	pub p2: PointId,
}

impl Connection {
	pub const fn new(p1: PointId, p2: PointId) -> Self {
		Self { p1, p2 }
	}

	pub fn contains(&self, id: PointId) -> bool {
		self.p1 == id || self.p2 == id
	}

	pub fn is_loop(&self) -> bool {
		self.p1 == self.p2
	}
}

impl PartialEq for Connection {
	fn eq(&self, other: &Self) -> bool {
		(self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
	}
}

/// Mouse buttons the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	/// Places and drags nodes.
	Primary,
	/// Draws and erases edges, deletes nodes on click.
	Secondary,
}

impl PointerButton {
	/// Maps a DOM `MouseEvent.button` code; other buttons are not handled.
	pub fn from_code(code: i16) -> Option<Self> {
		match code {
			0 => Some(Self::Primary),
			2 => Some(Self::Secondary),
			_ => None,
		}
	}
}
