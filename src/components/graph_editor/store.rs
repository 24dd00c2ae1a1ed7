use log::debug;

use super::geometry::Position;
use super::types::{Connection, Point, PointId};

/// Result of [`GraphStore::toggle_connection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
	Added,
	Removed,
	/// Self-loop or an endpoint that is not in the store.
	Rejected,
}

/// Nodes in insertion order plus the undirected edges between them.
///
/// Every connection's endpoints are members of `points`, no two connections
/// compare equal, and no connection is a loop.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	points: Vec<Point>,
	connections: Vec<Connection>,
	next_id: u64,
}

impl GraphStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn add_point(&mut self, pos: Position) -> PointId {
		let id = PointId(self.next_id);
		self.next_id += 1;
		self.points.push(Point { id, pos });
		debug!("added point {:?} at ({}, {})", id, pos.x, pos.y);
		id
	}

	pub fn point(&self, id: PointId) -> Option<&Point> {
		self.points.iter().find(|p| p.id == id)
	}

	pub fn contains_point(&self, id: PointId) -> bool {
		self.point(id).is_some()
	}

	/// Display index of the node (its insertion order among live nodes).
	pub fn index_of(&self, id: PointId) -> Option<usize> {
		self.points.iter().position(|p| p.id == id)
	}

	/// Overwrites the node's coordinates. Returns false if `id` is unknown.
	pub fn move_point(&mut self, id: PointId, pos: Position) -> bool {
		match self.points.iter_mut().find(|p| p.id == id) {
			Some(point) => {
				point.pos = pos;
				true
			}
			None => false,
		}
	}

	/// Removes the node and every connection touching it.
	///
	/// Returns the number of connections removed, or `None` if `id` is unknown.
	pub fn remove_point(&mut self, id: PointId) -> Option<usize> {
		let idx = self.index_of(id)?;
		self.points.remove(idx);
		let before = self.connections.len();
		self.connections.retain(|c| !c.contains(id));
		let dropped = before - self.connections.len();
		debug!("removed point {:?} and {} connections", id, dropped);
		Some(dropped)
	}

	pub fn find_connection(&self, connection: &Connection) -> Option<usize> {
		self.connections.iter().position(|c| c == connection)
	}

	/// Adds the connection, or removes it if an equal one already exists.
	pub fn toggle_connection(&mut self, connection: Connection) -> Toggle {
		if connection.is_loop()
			|| !self.contains_point(connection.p1)
			|| !self.contains_point(connection.p2)
		{
			return Toggle::Rejected;
		}
		match self.find_connection(&connection) {
			Some(idx) => {
				self.connections.remove(idx);
				debug!("removed connection {:?} - {:?}", connection.p1, connection.p2);
				Toggle::Removed
			}
			None => {
				self.connections.push(connection);
				debug!("added connection {:?} - {:?}", connection.p1, connection.p2);
				Toggle::Added
			}
		}
	}

	/// Number of connections incident to `id`.
	pub fn neighbor_count(&self, id: PointId) -> usize {
		self.connections.iter().filter(|c| c.contains(id)).count()
	}
}
