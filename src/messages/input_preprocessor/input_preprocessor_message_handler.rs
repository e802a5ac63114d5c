use crate::config::EditorConfig;
use crate::messages::input_preprocessor::utility_types::{ModifierKeys, ViewportBounds};
use crate::messages::prelude::*;

use glam::DVec2;

pub struct InputPreprocessorMessageContext<'a> {
	pub config: &'a EditorConfig,
}

/// Tracks raw input state shared by the other handlers and routes wheel gestures to
/// their navigation semantics. The device-pixel-ratio-scaled ruler margins and the
/// panel's client-space origin live here because both are derived from the viewport
/// bounds the host reports.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPreprocessorMessageHandler {
	pub mouse_position: DVec2,
	pub viewport_bounds: ViewportBounds,
	pub scale_height_zoom: f64,
	pub start_margin_zoom: f64,
	/// Distance from the client origin to the ruler origin, horizontal axis.
	pub left_offset: f64,
	/// Distance from the client origin to the ruler origin, vertical axis.
	pub top_offset: f64,
}

impl Default for InputPreprocessorMessageHandler {
	fn default() -> Self {
		let config = EditorConfig::default();
		Self {
			mouse_position: DVec2::ZERO,
			viewport_bounds: ViewportBounds::default(),
			scale_height_zoom: config.scale_height,
			start_margin_zoom: config.start_margin,
			left_offset: config.scale_height,
			top_offset: config.scale_height,
		}
	}
}

impl MessageHandler<InputPreprocessorMessage, InputPreprocessorMessageContext<'_>> for InputPreprocessorMessageHandler {
	fn process_message(&mut self, message: InputPreprocessorMessage, responses: &mut VecDeque<Message>, context: InputPreprocessorMessageContext) {
		let InputPreprocessorMessageContext { config } = context;

		match message {
			InputPreprocessorMessage::BoundsOfViewport { bounds } => {
				self.viewport_bounds = bounds;
				self.scale_height_zoom = config.scale_height * bounds.device_pixel_ratio;
				self.start_margin_zoom = config.start_margin * bounds.device_pixel_ratio;
				self.left_offset = bounds.left.ceil() + self.scale_height_zoom;
				self.top_offset = bounds.top.ceil() + self.scale_height_zoom;

				responses.add(NavigationMessage::ViewportResized);
			}
			InputPreprocessorMessage::PointerMove { position, modifier_keys: _ } => {
				self.mouse_position = position;

				responses.add(ToolMessage::PointerMove);
			}
			InputPreprocessorMessage::WheelScroll { wheel_delta, modifier_keys } => {
				if modifier_keys.zoom_chord() {
					responses.add(NavigationMessage::CanvasZoomMouseWheel { wheel_delta });
				} else {
					let use_y_as_x = modifier_keys.contains(ModifierKeys::SHIFT);
					responses.add(NavigationMessage::CanvasPanMouseWheel { wheel_delta, use_y_as_x });
				}
			}
		}
	}
}

impl InputPreprocessorMessageHandler {
	/// Client-space origin of the page area (past both rulers and the start margin).
	pub fn page_origin(&self) -> DVec2 {
		DVec2::new(self.left_offset + self.start_margin_zoom, self.top_offset + self.start_margin_zoom)
	}

	pub fn viewport_offset(&self) -> DVec2 {
		DVec2::new(self.left_offset, self.top_offset)
	}
}
