/// Drawn radius of a node disc, in surface pixels.
pub const NODE_RADIUS: f64 = 5.0;
/// Multiplier turning the drawn radius into the pick radius.
pub const PROXIMITY_FACTOR: f64 = 1.5;

/// A location on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(&self, other: Position) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// True when `q` lies within `pick_radius` of `p`, boundary included.
pub fn collides(p: Position, q: Position, pick_radius: f64) -> bool {
	p.distance_to(q) <= pick_radius
}
