use crate::config::EditorConfig;
use crate::consts::{RULER_MAJOR_TICK_INTERVAL, RULER_MID_TICK_INTERVAL, RULER_OVERDRAW_LOW_ZOOM, RULER_OVERDRAW_PAGE_FRACTION, RULER_OVERDRAW_ZOOM_THRESHOLD};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rounds to the nearest integer with halves going up, matching the display semantics
/// used at every screen/logical boundary (sub-pixel logical coordinates are not meaningful).
pub fn round_half_up(value: f64) -> f64 {
	(value + 0.5).floor()
}

/// Maps a zoom percent to its `(tick step base, tolerance percent)` pair.
///
/// The tolerance is 0 at each bracket's lower bound and grows within the bracket,
/// stretching tick spacing smoothly as zoom increases, then resets at the next bracket
/// so ticks never become illegibly dense or sparse. Total over all inputs; negative
/// values fall into the first bracket.
pub fn zoom_bracket(zoom: f64) -> (f64, f64) {
	if zoom < 20. {
		(20., 0.)
	} else if zoom < 40. {
		(20., (zoom - 20.) * 5.)
	} else if zoom < 80. {
		(40., (zoom - 40.) * 2.5)
	} else if zoom < 100. {
		(80., (zoom - 80.) * 1.25)
	} else if zoom < 125. {
		(100., zoom - 100.)
	} else {
		(125., (zoom - 125.) * 1.333334)
	}
}

/// Zoom, unit, and pan state for one canvas session. Always owned by the session's
/// navigation handler and passed by reference into the operations that read it —
/// never ambient or static.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
	/// Zoom percent, clamped to the configured `[min_scale, max_scale]`.
	pub zoom: f64,
	/// Conversion factor, logical units per device pixel. Strictly positive.
	pub unit: f64,
	/// Pan offset in device pixels. Components never exceed 0 (the page cannot
	/// scroll past its own top-left corner).
	pub pan: DVec2,
	/// Page width in device pixels at the current zoom.
	pub zoom_page_width: f64,
	/// Page height in device pixels at the current zoom.
	pub zoom_page_height: f64,
}

impl Default for ViewState {
	fn default() -> Self {
		let config = EditorConfig::default();
		Self {
			zoom: 100.,
			unit: 1.,
			pan: DVec2::ZERO,
			zoom_page_width: config.screen_width,
			zoom_page_height: config.screen_height,
		}
	}
}

impl ViewState {
	/// Applies a zoom request: clamps the percent, derives the new unit from the zoom
	/// bracket and tick spacing, and rescales the pan offsets by `old_unit / new_unit`
	/// so the same logical point stays under the same screen point.
	pub fn set_zoom(&mut self, requested: f64, config: &EditorConfig) {
		let zoom = requested.clamp(config.min_scale, config.max_scale);
		let (base, tolerance) = zoom_bracket(zoom);
		let scale = 100. / base;
		let adjusted_line_margin = config.line_margin * (100. + tolerance) / 100.;
		let unit = config.precision * scale / adjusted_line_margin;

		self.pan *= self.unit / unit;
		self.zoom = zoom;
		self.unit = unit;
		self.zoom_page_width = config.screen_width / unit;
		self.zoom_page_height = config.screen_height / unit;
	}

	/// Converts a client-space position to a logical page coordinate, rounded to the
	/// nearest logical unit. `viewport_offset` is the ruler origin in client space and
	/// `start_margin_zoom` the DPR-scaled gap between the rulers and the page.
	pub fn screen_to_logical(&self, screen: DVec2, viewport_offset: DVec2, start_margin_zoom: f64) -> DVec2 {
		let logical = (screen - self.pan - viewport_offset - DVec2::splat(start_margin_zoom)) * self.unit;
		DVec2::new(round_half_up(logical.x), round_half_up(logical.y))
	}

	/// Inverse of [`Self::screen_to_logical`], without the rounding step.
	pub fn logical_to_screen(&self, logical: DVec2, viewport_offset: DVec2, start_margin_zoom: f64) -> DVec2 {
		logical / self.unit + self.pan + viewport_offset + DVec2::splat(start_margin_zoom)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
	Minor,
	Mid,
	Major,
}

/// One ruler graduation mark. `label` is populated for mid and major ticks only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
	pub index: usize,
	/// Draw position along the ruler strip, in CSS pixels.
	pub position: f64,
	pub label: Option<f64>,
	pub kind: TickKind,
}

/// Generates the ordered tick sequence for one ruler strip. Regenerated wholesale on
/// every zoom or viewport-size change; tick counts stay in the low hundreds, so no
/// incremental update is attempted.
pub fn ruler_ticks(config: &EditorConfig, zoom: f64, canvas_width: f64, device_pixel_ratio: f64, start_margin_zoom: f64) -> Vec<Tick> {
	let total = canvas_width / config.line_margin;
	let (base, tolerance) = zoom_bracket(zoom);
	let scale = 100. / base;
	let adjusted_line_margin = config.line_margin * (100. + tolerance) / 100. / device_pixel_ratio;

	let mut ticks = Vec::new();
	let mut index = 0;
	while (index as f64) < total {
		let position = start_margin_zoom / device_pixel_ratio + index as f64 * adjusted_line_margin;
		let kind = if index % RULER_MAJOR_TICK_INTERVAL == 0 {
			TickKind::Major
		} else if index % RULER_MID_TICK_INTERVAL == 0 {
			TickKind::Mid
		} else {
			TickKind::Minor
		};
		let label = (kind != TickKind::Minor).then(|| (index as f64 * config.precision * scale).round());
		ticks.push(Tick { index, position, label, kind });
		index += 1;
	}
	ticks
}

/// Length of the ruler strip worth generating ticks for: the page's longest side at
/// the current zoom plus some overdraw, so panning never exposes a bare strip.
pub fn ruler_canvas_width(config: &EditorConfig, zoom: f64, unit: f64) -> f64 {
	let factor = if zoom < RULER_OVERDRAW_ZOOM_THRESHOLD {
		RULER_OVERDRAW_LOW_ZOOM
	} else {
		1. / unit + RULER_OVERDRAW_PAGE_FRACTION
	};
	config.screen_width.max(config.screen_height) * factor + config.scale_height + config.start_margin
}
