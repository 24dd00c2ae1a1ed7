use log::{debug, trace};

use super::geometry::{NODE_RADIUS, PROXIMITY_FACTOR, Position};
use super::hit_test::find_target;
use super::store::{GraphStore, Toggle};
use super::types::{Connection, PointId, PointerButton};

/// Pointer displacement, in pixels, past which a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub node_radius: f64,
	pub proximity_factor: f64,
	pub drag_threshold: f64,
	pub node_color: String,
	pub focus_color: String,
	pub provisional_color: String,
	pub font: String,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			node_radius: NODE_RADIUS,
			proximity_factor: PROXIMITY_FACTOR,
			drag_threshold: DRAG_THRESHOLD,
			node_color: "black".into(),
			focus_color: "blue".into(),
			provisional_color: "red".into(),
			font: "12px sans-serif".into(),
		}
	}
}

impl EditorConfig {
	pub fn pick_radius(&self) -> f64 {
		self.node_radius * self.proximity_factor
	}
}

/// Far end of an edge that is still being drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeEnd {
	/// Hovering a node that would become the second endpoint.
	Node(PointId),
	/// Nothing under the pointer; the line follows it.
	Free(Position),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProvisionalEdge {
	pub from: PointId,
	pub to: EdgeEnd,
}

/// Phase of the current press/drag/release gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
	#[default]
	Idle,
	/// Primary press on `node` (possibly just created), not yet a drag.
	PendingNode { origin: Position, node: PointId },
	DraggingNode { node: PointId },
	/// Secondary press; a release here deletes `from`.
	PendingEdge {
		origin: Position,
		from: Option<PointId>,
	},
	DraggingEdge { from: PointId, to: EdgeEnd },
	/// Secondary drag that began off every node. Released without effect.
	Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down { pos: Position, button: PointerButton },
	Move { pos: Position },
	Up,
	Leave,
}

/// Readout shown for the focused node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusInfo {
	pub index: usize,
	pub pos: Position,
	pub neighbors: usize,
}

pub struct EditorState {
	pub store: GraphStore,
	pub config: EditorConfig,
	pub phase: DragPhase,
	pub focused: Option<PointId>,
	pub width: f64,
	pub height: f64,
}

impl EditorState {
	pub fn new(config: EditorConfig, width: f64, height: f64) -> Self {
		Self {
			store: GraphStore::new(),
			config,
			phase: DragPhase::Idle,
			focused: None,
			width,
			height,
		}
	}

	pub fn handle(&mut self, event: PointerEvent) {
		match event {
			PointerEvent::Down { pos, button } => self.pointer_down(pos, button),
			PointerEvent::Move { pos } => self.pointer_move(pos),
			PointerEvent::Up => self.pointer_up(),
			PointerEvent::Leave => self.pointer_leave(),
		}
	}

	fn hit(&self, pos: Position, exclude: &[PointId]) -> Option<PointId> {
		find_target(&self.store, pos, exclude, self.config.pick_radius())
	}

	pub fn pointer_down(&mut self, pos: Position, button: PointerButton) {
		let target = self.hit(pos, &[]);
		self.phase = match button {
			PointerButton::Primary => {
				let node = target.unwrap_or_else(|| {
					let id = self.store.add_point(pos);
					self.focused = Some(id);
					id
				});
				DragPhase::PendingNode { origin: pos, node }
			}
			PointerButton::Secondary => DragPhase::PendingEdge { origin: pos, from: target },
		};
		trace!("pointer down {:?} -> {:?}", button, self.phase);
	}

	pub fn pointer_move(&mut self, pos: Position) {
		self.focused = self.hit(pos, &[]);
		let threshold = self.config.drag_threshold;

		let phase = self.phase;
		self.phase = match phase {
			DragPhase::PendingNode { origin, node } if origin.distance_to(pos) > threshold => {
				trace!("drag started on {:?}", node);
				self.drag_node(node, pos)
			}
			DragPhase::DraggingNode { node } => self.drag_node(node, pos),
			DragPhase::PendingEdge { origin, from } if origin.distance_to(pos) > threshold => {
				match from {
					Some(from) => {
						trace!("edge drag started from {:?}", from);
						DragPhase::DraggingEdge { from, to: self.edge_end(from, pos) }
					}
					None => DragPhase::Ignored,
				}
			}
			DragPhase::DraggingEdge { from, .. } => DragPhase::DraggingEdge {
				from,
				to: self.edge_end(from, pos),
			},
			phase => phase,
		};
	}

	fn drag_node(&mut self, node: PointId, pos: Position) -> DragPhase {
		if !self.store.move_point(node, pos) {
			return DragPhase::Idle;
		}
		self.focused = Some(node);
		DragPhase::DraggingNode { node }
	}

	fn edge_end(&self, from: PointId, pos: Position) -> EdgeEnd {
		match self.hit(pos, &[from]) {
			Some(id) => EdgeEnd::Node(id),
			None => EdgeEnd::Free(pos),
		}
	}

	pub fn pointer_up(&mut self) {
		match std::mem::take(&mut self.phase) {
			DragPhase::PendingEdge { from: Some(node), .. } => {
				self.store.remove_point(node);
				self.focused = None;
			}
			DragPhase::DraggingEdge { from, to: EdgeEnd::Node(to) } => {
				match self.store.toggle_connection(Connection::new(from, to)) {
					Toggle::Rejected => debug!("edge {:?} - {:?} rejected", from, to),
					toggle => trace!("edge {:?} - {:?} {:?}", from, to, toggle),
				}
			}
			phase => trace!("pointer up, nothing to commit for {:?}", phase),
		}
	}

	/// Pointer left the surface: abandon the gesture without committing it.
	pub fn pointer_leave(&mut self) {
		if self.phase != DragPhase::Idle {
			debug!("gesture {:?} cancelled", self.phase);
		}
		self.phase = DragPhase::Idle;
		self.focused = None;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("surface resized to {}x{}", width, height);
		self.width = width;
		self.height = height;
	}

	pub fn provisional_edge(&self) -> Option<ProvisionalEdge> {
		match self.phase {
			DragPhase::DraggingEdge { from, to } => Some(ProvisionalEdge { from, to }),
			_ => None,
		}
	}

	pub fn info(&self) -> Option<FocusInfo> {
		let id = self.focused?;
		let index = self.store.index_of(id)?;
		Some(FocusInfo {
			index,
			pos: self.store.point(id)?.pos,
			neighbors: self.store.neighbor_count(id),
		})
	}
}
