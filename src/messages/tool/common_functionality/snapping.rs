use crate::consts::{NO_SNAP, SNAP_LABEL_OFFSET_X_FACTOR, SNAP_LABEL_OFFSET_Y_FACTOR, SNAP_TOLERANCE_UNIT_FACTOR};
use crate::messages::navigation::utility_types::round_half_up;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned shape footprint in logical page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self { left, top, width, height }
	}

	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}
}

/// The corrected position a snap pass proposes for the moving shape. Either component
/// may be the [`NO_SNAP`] sentinel, meaning that axis found no candidate within
/// tolerance and the shape keeps its dragged coordinate there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
	pub left: f64,
	pub top: f64,
}

impl Default for SnapResult {
	fn default() -> Self {
		Self { left: NO_SNAP, top: NO_SNAP }
	}
}

impl SnapResult {
	pub fn is_no_match(&self) -> bool {
		self.left == NO_SNAP && self.top == NO_SNAP
	}
}

/// One overlay primitive for the frontend to draw during a drag. Coordinates are
/// logical page coordinates; styling is the frontend's concern.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SnapDirective {
	/// Solid line along a page center axis.
	CenterLine { start: DVec2, end: DVec2 },
	/// Distance-to-origin readout drawn when chasing has ended without a match.
	Crosshair { position: DVec2 },
	/// Solid line along a user guide.
	GuideLine { start: DVec2, end: DVec2 },
	/// Ghost of the dragged shape's pre-drag footprint.
	OriginalPosition { rect: Rect },
	/// Solid line along a page boundary.
	PageEdge { start: DVec2, end: DVec2 },
	/// Tint over a sibling the shape aligned with.
	SiblingHighlight { rect: Rect },
	/// Dashed line shared with a sibling edge, labeled with the gap between the shapes.
	SiblingLine { start: DVec2, end: DVec2, gap: f64, label_position: DVec2 },
}

/// Everything a snap pass reads besides the moving shape itself.
#[derive(Clone, Copy)]
pub struct SnapContext<'a> {
	/// Page dimensions in logical coordinates.
	pub page: DVec2,
	/// Vertical guide positions (x coordinates).
	pub x_guides: &'a [f64],
	/// Horizontal guide positions (y coordinates).
	pub y_guides: &'a [f64],
	pub siblings: &'a [Rect],
	pub unit: f64,
}

/// `true` when `t` lies strictly within the symmetric snap tolerance.
fn within(t: f64, offset: f64) -> bool {
	t > -offset && t < offset
}

/// Runs every snap candidate against the moving shape and returns the winning position
/// per axis plus the overlay primitives for all candidates that matched.
///
/// Candidates are evaluated in a fixed order — page edges, then guides, then page
/// centers, then siblings — and a later match overwrites an earlier one on the same
/// axis, so the sibling checks have the highest priority. Every match contributes its
/// overlay directive even when a later candidate wins the position.
pub fn compute_snap(moving: Rect, context: &SnapContext) -> (SnapResult, Vec<SnapDirective>) {
	let SnapContext { page, x_guides, y_guides, siblings, unit } = *context;
	let offset = SNAP_TOLERANCE_UNIT_FACTOR * unit;
	let offset_x = SNAP_LABEL_OFFSET_X_FACTOR * unit;
	let offset_y = SNAP_LABEL_OFFSET_Y_FACTOR * unit;

	let ex = round_half_up(moving.left);
	let ey = round_half_up(moving.top);
	let ew = round_half_up(moving.width);
	let eh = round_half_up(moving.height);

	let mut result = SnapResult::default();
	let mut directives = Vec::new();

	// Page edges.
	if within(ex, offset) {
		result.left = 0.;
		directives.push(SnapDirective::PageEdge {
			start: DVec2::new(0., 0.),
			end: DVec2::new(0., page.y),
		});
	}
	if within(ex + ew - page.x, offset) {
		result.left = page.x - ew;
		directives.push(SnapDirective::PageEdge {
			start: DVec2::new(page.x, 0.),
			end: DVec2::new(page.x, page.y),
		});
	}
	if within(ey, offset) {
		result.top = 0.;
		directives.push(SnapDirective::PageEdge {
			start: DVec2::new(0., 0.),
			end: DVec2::new(page.x, 0.),
		});
	}
	if within(ey + eh - page.y, offset) {
		result.top = page.y - eh;
		directives.push(SnapDirective::PageEdge {
			start: DVec2::new(0., page.y),
			end: DVec2::new(page.x, page.y),
		});
	}

	// Guides. At most one edge of the shape matches any single guide.
	for &guide in x_guides {
		let line = SnapDirective::GuideLine {
			start: DVec2::new(guide, 0.),
			end: DVec2::new(guide, page.y),
		};
		if within(ex - guide, offset) {
			result.left = guide;
			directives.push(line);
			continue;
		}
		if within(ex + ew / 2. - guide, offset) {
			result.left = guide - ew / 2.;
			directives.push(line);
			continue;
		}
		if within(ex + ew - guide, offset) {
			result.left = guide - ew;
			directives.push(line);
		}
	}
	for &guide in y_guides {
		let line = SnapDirective::GuideLine {
			start: DVec2::new(0., guide),
			end: DVec2::new(page.x, guide),
		};
		if within(ey - guide, offset) {
			result.top = guide;
			directives.push(line);
			continue;
		}
		if within(ey + eh / 2. - guide, offset) {
			result.top = guide - eh / 2.;
			directives.push(line);
			continue;
		}
		if within(ey + eh - guide, offset) {
			result.top = guide - eh;
			directives.push(line);
		}
	}

	// Page center axes. The proposed positions use the exact page center, only the
	// tolerance comparison rounds it.
	let hc = round_half_up(page.x / 2.);
	let vc = round_half_up(page.y / 2.);
	let vertical_center = SnapDirective::CenterLine {
		start: DVec2::new(hc, 0.),
		end: DVec2::new(hc, page.y),
	};
	let horizontal_center = SnapDirective::CenterLine {
		start: DVec2::new(0., vc),
		end: DVec2::new(page.x, vc),
	};
	if within(ex - hc, offset) {
		result.left = page.x / 2.;
		directives.push(vertical_center);
	}
	if within(ex + ew / 2. - hc, offset) {
		result.left = (page.x - ew) / 2.;
		directives.push(vertical_center);
	}
	if within(ex + ew - hc, offset) {
		result.left = page.x / 2. - ew;
		directives.push(vertical_center);
	}
	if within(ey - vc, offset) {
		result.top = page.y / 2.;
		directives.push(horizontal_center);
	}
	if within(ey + eh / 2. - vc, offset) {
		result.top = (page.y - eh) / 2.;
		directives.push(horizontal_center);
	}
	if within(ey + eh - vc, offset) {
		result.top = page.y / 2. - eh;
		directives.push(horizontal_center);
	}

	// Sibling shapes. Each edge-pair match draws the shared dashed line with a label
	// for the gap between the shapes along the other axis.
	for &sibling in siblings {
		let mut hit = false;
		let horizontal_gap = round_half_up(ex - sibling.right());
		let vertical_gap = round_half_up(ey - sibling.bottom());

		if within(round_half_up(sibling.top - ey), offset) {
			result.top = sibling.top;
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(ex, sibling.top),
				end: DVec2::new(sibling.right(), sibling.top),
				gap: horizontal_gap,
				label_position: DVec2::new((ex + sibling.right()) / 2., ey - offset_y),
			});
		}
		if within(round_half_up(sibling.bottom() - ey), offset) {
			result.top = sibling.bottom();
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(ex, sibling.bottom()),
				end: DVec2::new(sibling.right(), sibling.bottom()),
				gap: horizontal_gap,
				label_position: DVec2::new((ex + sibling.right()) / 2., ey - offset_y),
			});
		}
		if within(round_half_up(sibling.left - ex), offset) {
			result.left = sibling.left;
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(sibling.left, ey),
				end: DVec2::new(sibling.left, sibling.bottom()),
				gap: vertical_gap,
				label_position: DVec2::new(ex - offset_x, (ey + sibling.bottom()) / 2.),
			});
		}
		if within(round_half_up(sibling.right() - ex), offset) {
			result.left = sibling.right();
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(sibling.right(), ey),
				end: DVec2::new(sibling.right(), sibling.bottom()),
				gap: vertical_gap,
				label_position: DVec2::new(ex - offset_x, (ey + sibling.bottom()) / 2.),
			});
		}
		if within(round_half_up(sibling.left - ex - ew), offset) {
			result.left = sibling.left - ew;
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(sibling.left, ey),
				end: DVec2::new(sibling.left, sibling.bottom()),
				gap: vertical_gap,
				label_position: DVec2::new(ex + ew + offset_y, (ey + sibling.bottom()) / 2.),
			});
		}
		if within(round_half_up(sibling.right() - ex - ew), offset) {
			result.left = sibling.right() - ew;
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(sibling.right(), ey),
				end: DVec2::new(sibling.right(), sibling.bottom()),
				gap: vertical_gap,
				label_position: DVec2::new(ex + ew + offset_y, (ey + sibling.bottom()) / 2.),
			});
		}
		if within(round_half_up(sibling.top - ey - eh), offset) {
			result.top = sibling.top - eh;
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(ex, sibling.top),
				end: DVec2::new(sibling.right(), sibling.top),
				gap: horizontal_gap,
				label_position: DVec2::new((ex + sibling.right()) / 2., ey + eh + offset_y),
			});
		}
		if within(round_half_up(sibling.bottom() - ey - eh), offset) {
			result.top = sibling.bottom() - eh;
			hit = true;
			directives.push(SnapDirective::SiblingLine {
				start: DVec2::new(ex, sibling.bottom()),
				end: DVec2::new(sibling.right(), sibling.bottom()),
				gap: horizontal_gap,
				label_position: DVec2::new((ex + sibling.right()) / 2., ey + eh + offset_y),
			});
		}

		if hit {
			directives.push(SnapDirective::SiblingHighlight { rect: sibling });
		}
	}

	(result, directives)
}
