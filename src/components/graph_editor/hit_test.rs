use super::geometry::{Position, collides};
use super::store::GraphStore;
use super::types::PointId;

/// Finds the node nearest to `reference` within `pick_radius`, skipping `exclude`.
///
/// Linear scan over all nodes. On an exact distance tie the earlier node wins.
pub fn find_target(
	store: &GraphStore,
	reference: Position,
	exclude: &[PointId],
	pick_radius: f64,
) -> Option<PointId> {
	let mut best: Option<(PointId, f64)> = None;
	for point in store.points() {
		if exclude.contains(&point.id) || !collides(point.pos, reference, pick_radius) {
			continue;
		}
		let distance = point.pos.distance_to(reference);
		if best.is_none_or(|(_, d)| distance < d) {
			best = Some((point.id, distance));
		}
	}
	best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
	use super::*;

	const PICK: f64 = 7.5;

	#[test]
	fn empty_store_has_no_target() {
		let store = GraphStore::new();
		assert_eq!(find_target(&store, Position::default(), &[], PICK), None);
	}

	#[test]
	fn misses_outside_pick_radius() {
		let mut store = GraphStore::new();
		store.add_point(Position::new(100.0, 100.0));
		assert_eq!(find_target(&store, Position::new(108.0, 100.0), &[], PICK), None);
	}

	#[test]
	fn boundary_is_a_hit() {
		let mut store = GraphStore::new();
		let a = store.add_point(Position::new(100.0, 100.0));
		assert_eq!(find_target(&store, Position::new(107.5, 100.0), &[], PICK), Some(a));
	}

	#[test]
	fn nearest_wins_regardless_of_order() {
		let mut store = GraphStore::new();
		let far = store.add_point(Position::new(0.0, 0.0));
		let near = store.add_point(Position::new(6.0, 0.0));
		assert_eq!(find_target(&store, Position::new(4.0, 0.0), &[], PICK), Some(near));
		assert_eq!(find_target(&store, Position::new(2.0, 0.0), &[], PICK), Some(far));
	}

	#[test]
	fn first_wins_on_exact_tie() {
		let mut store = GraphStore::new();
		let first = store.add_point(Position::new(0.0, 0.0));
		store.add_point(Position::new(0.0, 0.0));
		assert_eq!(find_target(&store, Position::new(1.0, 1.0), &[], PICK), Some(first));
	}

	#[test]
	fn excluded_nodes_are_skipped() {
		let mut store = GraphStore::new();
		let a = store.add_point(Position::new(0.0, 0.0));
		let b = store.add_point(Position::new(5.0, 0.0));
		let at_a = Position::new(0.0, 0.0);
		assert_eq!(find_target(&store, at_a, &[a], PICK), Some(b));
		assert_eq!(find_target(&store, at_a, &[a, b], PICK), None);
	}
}
