use crate::error::EditorError;
use crate::messages::navigation::utility_types::round_half_up;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Names the coordinate a guide measures: an `X` guide is a vertical line at
/// `x = position`, a `Y` guide is a horizontal line at `y = position`. This is the one
/// axis convention used throughout the crate.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum GuideAxis {
	X,
	Y,
}

impl FromStr for GuideAxis {
	type Err = EditorError;

	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		match tag {
			"h" | "x" => Ok(GuideAxis::X),
			"v" | "y" => Ok(GuideAxis::Y),
			_ => Err(EditorError::InvalidAxis(tag.to_string())),
		}
	}
}

impl fmt::Display for GuideAxis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GuideAxis::X => write!(f, "x"),
			GuideAxis::Y => write!(f, "y"),
		}
	}
}

/// Guide positions for one axis, in logical coordinates. Iteration order is insertion
/// order for rendering; membership is keyed by the rounded integer position, so adding
/// at a position whose rounded key collides with an existing guide replaces it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideSet {
	order: Vec<f64>,
	keys: HashSet<i64>,
}

impl GuideSet {
	fn key(position: f64) -> i64 {
		round_half_up(position) as i64
	}

	pub fn add(&mut self, position: f64) {
		let key = Self::key(position);
		if !self.keys.insert(key) {
			self.order.retain(|&existing| Self::key(existing) != key);
		}
		self.order.push(position);
	}

	/// Removes the guide whose rounded key matches `position`; a miss is a no-op.
	pub fn remove(&mut self, position: f64) {
		let key = Self::key(position);
		if self.keys.remove(&key) {
			self.order.retain(|&existing| Self::key(existing) != key);
		}
	}

	/// Repositions a guide, equivalent to `remove(from)` then `add(to)` with no
	/// observable intermediate state.
	pub fn relocate(&mut self, from: f64, to: f64) {
		self.remove(from);
		self.add(to);
	}

	pub fn contains(&self, position: f64) -> bool {
		self.keys.contains(&Self::key(position))
	}

	pub fn positions(&self) -> &[f64] {
		&self.order
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn axis_parses_both_tag_styles() {
		assert_eq!("h".parse::<GuideAxis>(), Ok(GuideAxis::X));
		assert_eq!("x".parse::<GuideAxis>(), Ok(GuideAxis::X));
		assert_eq!("v".parse::<GuideAxis>(), Ok(GuideAxis::Y));
		assert_eq!("y".parse::<GuideAxis>(), Ok(GuideAxis::Y));
	}

	#[test]
	fn unknown_axis_tag_is_a_contract_violation() {
		assert_eq!("diagonal".parse::<GuideAxis>(), Err(EditorError::InvalidAxis("diagonal".to_string())));
	}

	#[test]
	fn add_then_remove_leaves_empty() {
		let mut guides = GuideSet::default();
		guides.add(250.);
		guides.remove(250.);
		assert!(guides.is_empty());
	}

	#[test]
	fn duplicate_add_keeps_one_entry() {
		let mut guides = GuideSet::default();
		guides.add(250.);
		guides.add(250.);
		assert_eq!(guides.len(), 1);
	}

	#[test]
	fn colliding_rounded_keys_overwrite() {
		let mut guides = GuideSet::default();
		guides.add(250.2);
		guides.add(249.8);
		assert_eq!(guides.positions(), &[249.8]);
	}

	#[test]
	fn removing_absent_position_is_a_no_op() {
		let mut guides = GuideSet::default();
		guides.add(100.);
		guides.remove(500.);
		assert_eq!(guides.len(), 1);
	}

	#[test]
	fn relocate_preserves_count_and_updates_key() {
		let mut guides = GuideSet::default();
		guides.add(100.);
		guides.add(200.);
		guides.relocate(100., 300.);
		assert_eq!(guides.len(), 2);
		assert!(!guides.contains(100.));
		assert!(guides.contains(300.));
		// Insertion order: the relocated guide moves to the back.
		assert_eq!(guides.positions(), &[200., 300.]);
	}
}
