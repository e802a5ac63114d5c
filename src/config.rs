use crate::consts::{VIEWPORT_SCALE_MAX, VIEWPORT_SCALE_MIN};
use serde::{Deserialize, Serialize};

/// Panel configuration, resolved once at construction and never re-merged afterwards.
///
/// All lengths are in device pixels unless stated otherwise. The device-pixel-ratio-scaled
/// derivatives of `scale_height` and `start_margin` are owned by the input preprocessor and
/// recomputed whenever the host reports new viewport bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
	/// Thickness of each ruler bar.
	pub scale_height: f64,
	/// Gap between the ruler origin and the page's top-left corner.
	pub start_margin: f64,
	/// Spacing between adjacent ruler ticks before tolerance adjustment.
	pub line_margin: f64,
	/// Logical length represented by one unscaled tick interval.
	pub precision: f64,
	/// Page width in logical units.
	pub screen_width: f64,
	/// Page height in logical units.
	pub screen_height: f64,
	/// Lower bound of the zoom percent range.
	pub min_scale: f64,
	/// Upper bound of the zoom percent range.
	pub max_scale: f64,
	/// Initial zoom percent; `-1.` requests auto-fit against the reported viewport bounds.
	pub zoom: f64,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			scale_height: 20.,
			start_margin: 40.,
			line_margin: 10.,
			precision: 10.,
			screen_width: 1920.,
			screen_height: 1080.,
			min_scale: VIEWPORT_SCALE_MIN,
			max_scale: VIEWPORT_SCALE_MAX,
			zoom: -1.,
		}
	}
}
