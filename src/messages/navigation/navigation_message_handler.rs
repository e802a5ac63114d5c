use crate::config::EditorConfig;
use crate::consts::{VIEWPORT_ZOOM_FIT_MARGIN, VIEWPORT_ZOOM_WHEEL_STEP};
use crate::messages::guides::utility_types::GuideAxis;
use crate::messages::navigation::utility_types::{ViewState, round_half_up, ruler_canvas_width, ruler_ticks};
use crate::messages::prelude::*;

use glam::DVec2;

pub struct NavigationMessageContext<'a> {
	pub config: &'a EditorConfig,
	pub ipp: &'a InputPreprocessorMessageHandler,
}

/// Owns the session's [`ViewState`] and implements the zoom, pan, and ruler semantics:
/// zoom requests clamp and re-derive the unit, wheel gestures step or pan, pans soft-stop
/// at the page bounds, and every zoom or resize regenerates the ruler tick list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationMessageHandler {
	pub view: ViewState,
}

impl MessageHandler<NavigationMessage, NavigationMessageContext<'_>> for NavigationMessageHandler {
	fn process_message(&mut self, message: NavigationMessage, responses: &mut VecDeque<Message>, context: NavigationMessageContext) {
		let NavigationMessageContext { config, ipp } = context;

		match message {
			NavigationMessage::CanvasPan { delta } => {
				let bounds = ipp.viewport_bounds;
				// The exposed distance compares against the zoomed page extent; the trailing
				// ruler gap is counted once scaled and once unscaled.
				let exposure_x = bounds.width - 2. * ipp.start_margin_zoom - config.scale_height;
				let exposure_y = bounds.height - 2. * ipp.start_margin_zoom - config.scale_height;

				if delta.x != 0. {
					self.view.pan.x = soft_stop_pan(self.view.pan.x, delta.x, exposure_x, self.view.zoom_page_width);
				}
				if delta.y != 0. {
					self.view.pan.y = soft_stop_pan(self.view.pan.y, delta.y, exposure_y, self.view.zoom_page_height);
				}

				responses.add(FrontendMessage::UpdatePan { pan: self.view.pan.into() });
			}
			NavigationMessage::CanvasPanMouseWheel { wheel_delta, use_y_as_x } => {
				let delta = if use_y_as_x { DVec2::new(wheel_delta, 0.) } else { DVec2::new(0., wheel_delta) };
				responses.add(NavigationMessage::CanvasPan { delta });
			}
			NavigationMessage::CanvasZoomMouseWheel { wheel_delta } => {
				if wheel_delta > 0. {
					if self.view.zoom + VIEWPORT_ZOOM_WHEEL_STEP <= config.max_scale {
						responses.add(NavigationMessage::SetZoom {
							zoom: self.view.zoom + VIEWPORT_ZOOM_WHEEL_STEP,
						});
					}
				} else if self.view.zoom > config.min_scale {
					responses.add(NavigationMessage::SetZoom {
						zoom: self.view.zoom - VIEWPORT_ZOOM_WHEEL_STEP,
					});
				}
			}
			NavigationMessage::FitToViewport => {
				let bounds = ipp.viewport_bounds;
				if bounds.width <= 0. || bounds.height <= 0. {
					warn!("Cannot fit to a zero-sized viewport");
					return;
				}

				let width_ratio = (bounds.width - ipp.start_margin_zoom - ipp.scale_height_zoom) / config.screen_width;
				let height_ratio = (bounds.height - ipp.start_margin_zoom - ipp.scale_height_zoom) / config.screen_height;
				let side = width_ratio.min(height_ratio);

				self.set_zoom(round_half_up(side * 100. - VIEWPORT_ZOOM_FIT_MARGIN), config, ipp, responses);
			}
			NavigationMessage::RulerHover { axis, position } => {
				let (pan, offset) = match axis {
					GuideAxis::X => (self.view.pan.x, ipp.left_offset),
					GuideAxis::Y => (self.view.pan.y, ipp.top_offset),
				};
				let relative = position - pan - offset;
				let value = round_half_up((relative - ipp.start_margin_zoom) * self.view.unit);

				responses.add(FrontendMessage::UpdateRulerIndicator {
					axis,
					position: relative,
					value,
					visible: true,
				});
			}
			NavigationMessage::RulerLeave { axis } => {
				responses.add(FrontendMessage::UpdateRulerIndicator {
					axis,
					position: 0.,
					value: 0.,
					visible: false,
				});
			}
			NavigationMessage::SetZoom { zoom } => {
				if zoom == -1. {
					responses.add(NavigationMessage::FitToViewport);
				} else {
					self.set_zoom(zoom, config, ipp, responses);
				}
			}
			NavigationMessage::ViewportResized => {
				if config.zoom == -1. {
					responses.add(NavigationMessage::FitToViewport);
				} else {
					// Explicit zoom stays put; regenerate the ticks for the new margins.
					responses.add(NavigationMessage::SetZoom { zoom: self.view.zoom });
				}
			}
		}
	}
}

impl NavigationMessageHandler {
	fn set_zoom(&mut self, requested: f64, config: &EditorConfig, ipp: &InputPreprocessorMessageHandler, responses: &mut VecDeque<Message>) {
		self.view.set_zoom(requested, config);

		responses.add(FrontendMessage::UpdateZoom {
			zoom: self.view.zoom,
			unit: self.view.unit,
		});
		responses.add(FrontendMessage::UpdatePan { pan: self.view.pan.into() });

		let canvas_width = ruler_canvas_width(config, self.view.zoom, self.view.unit);
		let ticks = ruler_ticks(config, self.view.zoom, canvas_width, ipp.viewport_bounds.device_pixel_ratio, ipp.start_margin_zoom);
		responses.add(FrontendMessage::UpdateRulerTicks { ticks });
	}
}

/// Accumulates a pan delta with the soft-stop behavior at the page bounds: an overshoot
/// past the top-left resets to 0, while an overshoot past the bottom-right rejects the
/// delta outright (previous value kept) — but only once the previous value already
/// overshot, and only when moving further in the overflow direction.
fn soft_stop_pan(current: f64, delta: f64, viewport_exposure: f64, page_extent: f64) -> f64 {
	let mut pan = current + delta;
	if pan > 0. {
		return 0.;
	}
	if delta < 0. {
		let exposed_after = -pan + viewport_exposure;
		let exposed_before = -current + viewport_exposure;
		if exposed_after > page_extent && exposed_before > page_extent {
			pan = current;
		}
	}
	pan
}
