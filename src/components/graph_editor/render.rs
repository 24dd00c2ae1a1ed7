use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::geometry::Position;
use super::state::{EdgeEnd, EditorState};
use super::types::Connection;

/// Drawing primitives the editor needs from its host surface.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, center: Position, radius: f64, color: &str);
	fn line(&self, from: Position, to: Position, color: &str);
	fn stroke_rect(&self, x: f64, y: f64, width: f64, height: f64, color: &str);
	fn text(&self, text: &str, at: Position, max_width: f64, color: &str, font: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, center: Position, radius: f64, color: &str) {
		self.set_fill_style_str(color);
		self.set_stroke_style_str(color);
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.fill();
		self.stroke();
	}

	fn line(&self, from: Position, to: Position, color: &str) {
		self.set_stroke_style_str(color);
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn stroke_rect(&self, x: f64, y: f64, width: f64, height: f64, color: &str) {
		self.set_stroke_style_str(color);
		CanvasRenderingContext2d::stroke_rect(self, x, y, width, height);
	}

	fn text(&self, text: &str, at: Position, max_width: f64, color: &str, font: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		let _ = self.fill_text_with_max_width(text, at.x, at.y, max_width);
	}
}

const INFO_BOX: (f64, f64, f64, f64) = (10.0, 10.0, 100.0, 70.0);
const INFO_TEXT_X: f64 = 20.0;
const INFO_TEXT_WIDTH: f64 = 80.0;

/// Repaints the whole frame from the store.
pub fn render<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	surface.clear(state.width, state.height);
	draw_info(state, surface);
	draw_connections(state, surface);
	draw_points(state, surface);
	draw_provisional(state, surface);
}

/// Applies new surface dimensions and repaints, since resizing wipes the surface.
pub fn resize_and_render<S: Surface + ?Sized>(
	state: &mut EditorState,
	surface: &S,
	width: f64,
	height: f64,
) {
	state.resize(width, height);
	render(state, surface);
}

fn draw_info<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	let Some(info) = state.info() else {
		return;
	};
	let (color, font) = (&state.config.node_color, &state.config.font);
	let (x, y, w, h) = INFO_BOX;
	surface.stroke_rect(x, y, w, h, color);
	let lines = [
		format!("Point {}", info.index),
		format!("{}, {}", info.pos.x, info.pos.y),
		format!("{} neighbors", info.neighbors),
	];
	for (i, line) in lines.iter().enumerate() {
		let at = Position::new(INFO_TEXT_X, 25.0 + 20.0 * i as f64);
		surface.text(line, at, INFO_TEXT_WIDTH, color, font);
	}
}

fn draw_connections<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	for connection in state.store.connections() {
		let focused = state.focused.is_some_and(|id| connection.contains(id));
		draw_connection(state, surface, connection, color_for(state, focused));
	}
}

fn draw_connection<S: Surface + ?Sized>(
	state: &EditorState,
	surface: &S,
	connection: &Connection,
	color: &str,
) {
	if let (Some(p1), Some(p2)) = (
		state.store.point(connection.p1),
		state.store.point(connection.p2),
	) {
		surface.line(p1.pos, p2.pos, color);
	}
}

fn draw_points<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	for point in state.store.points() {
		let color = color_for(state, state.focused == Some(point.id));
		surface.fill_circle(point.pos, state.config.node_radius, color);
	}
}

fn draw_provisional<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	let Some(edge) = state.provisional_edge() else {
		return;
	};
	let Some(from) = state.store.point(edge.from) else {
		return;
	};
	let to = match edge.to {
		EdgeEnd::Node(id) => match state.store.point(id) {
			Some(point) => point.pos,
			None => return,
		},
		EdgeEnd::Free(pos) => pos,
	};
	surface.line(from.pos, to, &state.config.provisional_color);
}

fn color_for(state: &EditorState, focused: bool) -> &str {
	if focused {
		&state.config.focus_color
	} else {
		&state.config.node_color
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::graph_editor::state::EditorConfig;
	use crate::components::graph_editor::types::PointerButton;

	#[derive(Debug, Clone, PartialEq)]
	enum Call {
		Clear,
		Circle(Position, String),
		Line(Position, Position, String),
		Rect,
		Text(String),
	}

	#[derive(Default)]
	struct Recorder {
		calls: RefCell<Vec<Call>>,
	}

	impl Surface for Recorder {
		fn clear(&self, _: f64, _: f64) {
			self.calls.borrow_mut().push(Call::Clear);
		}
		fn fill_circle(&self, center: Position, _: f64, color: &str) {
			self.calls.borrow_mut().push(Call::Circle(center, color.into()));
		}
		fn line(&self, from: Position, to: Position, color: &str) {
			self.calls.borrow_mut().push(Call::Line(from, to, color.into()));
		}
		fn stroke_rect(&self, _: f64, _: f64, _: f64, _: f64, _: &str) {
			self.calls.borrow_mut().push(Call::Rect);
		}
		fn text(&self, text: &str, _: Position, _: f64, _: &str, _: &str) {
			self.calls.borrow_mut().push(Call::Text(text.into()));
		}
	}

	fn two_linked() -> EditorState {
		let mut s = EditorState::new(EditorConfig::default(), 400.0, 300.0);
		for x in [100.0, 200.0] {
			s.pointer_down(Position::new(x, 100.0), PointerButton::Primary);
			s.pointer_up();
		}
		s.pointer_down(Position::new(100.0, 100.0), PointerButton::Secondary);
		s.pointer_move(Position::new(200.0, 100.0));
		s.pointer_up();
		s
	}

	#[test]
	fn empty_store_only_clears() {
		let s = EditorState::new(EditorConfig::default(), 400.0, 300.0);
		let r = Recorder::default();
		render(&s, &r);
		assert_eq!(r.calls.into_inner(), vec![Call::Clear]);
	}

	#[test]
	fn edges_are_drawn_beneath_nodes() {
		let mut s = two_linked();
		s.pointer_leave();
		let r = Recorder::default();
		render(&s, &r);
		let calls = r.calls.into_inner();
		let black = String::from("black");
		assert_eq!(
			calls,
			vec![
				Call::Clear,
				Call::Line(Position::new(100.0, 100.0), Position::new(200.0, 100.0), black.clone()),
				Call::Circle(Position::new(100.0, 100.0), black.clone()),
				Call::Circle(Position::new(200.0, 100.0), black),
			]
		);
	}

	#[test]
	fn focused_node_gets_info_box_and_highlight() {
		let mut s = two_linked();
		s.pointer_move(Position::new(201.0, 100.0));
		let r = Recorder::default();
		render(&s, &r);
		let calls = r.calls.into_inner();
		assert_eq!(calls[1], Call::Rect);
		assert_eq!(calls[2], Call::Text("Point 1".into()));
		assert_eq!(calls[3], Call::Text("200, 100".into()));
		assert_eq!(calls[4], Call::Text("1 neighbors".into()));
		assert!(calls.contains(&Call::Circle(Position::new(200.0, 100.0), "blue".into())));
		assert!(calls.contains(&Call::Circle(Position::new(100.0, 100.0), "black".into())));
		assert!(
			calls
				.iter()
				.any(|c| matches!(c, Call::Line(_, _, color) if color == "blue"))
		);
	}

	#[test]
	fn resize_repaints_every_node() {
		let mut s = EditorState::new(EditorConfig::default(), 400.0, 300.0);
		for x in [100.0, 200.0] {
			s.pointer_down(Position::new(x, 100.0), PointerButton::Primary);
			s.pointer_up();
		}
		s.pointer_leave();
		let r = Recorder::default();
		resize_and_render(&mut s, &r, 1024.0, 768.0);
		assert_eq!((s.width, s.height), (1024.0, 768.0));
		let black = String::from("black");
		assert_eq!(
			r.calls.into_inner(),
			vec![
				Call::Clear,
				Call::Circle(Position::new(100.0, 100.0), black.clone()),
				Call::Circle(Position::new(200.0, 100.0), black),
			]
		);
	}

	#[test]
	fn provisional_edge_is_drawn_last() {
		let mut s = two_linked();
		s.pointer_down(Position::new(200.0, 100.0), PointerButton::Secondary);
		s.pointer_move(Position::new(250.0, 150.0));
		let r = Recorder::default();
		render(&s, &r);
		let calls = r.calls.into_inner();
		assert_eq!(
			calls.last(),
			Some(&Call::Line(
				Position::new(200.0, 100.0),
				Position::new(250.0, 150.0),
				"red".into()
			))
		);
	}
}
