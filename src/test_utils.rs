use crate::application::Editor;
use crate::messages::input_preprocessor::utility_types::{ModifierKeys, ViewportBounds};
use crate::messages::prelude::*;

use glam::DVec2;

/// Routes `log` output through the test harness; safe to call from every test.
pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Shorthand for driving an [`Editor`] through common host interactions in tests.
pub trait EditorTestSupport {
	fn test_with_viewport(width: f64, height: f64) -> Editor;
	fn test_set_viewport(&mut self, width: f64, height: f64) -> Vec<FrontendMessage>;
	fn test_pointer_move(&mut self, x: f64, y: f64) -> Vec<FrontendMessage>;
	fn test_wheel(&mut self, wheel_delta: f64, modifier_keys: ModifierKeys) -> Vec<FrontendMessage>;
}

impl EditorTestSupport for Editor {
	fn test_with_viewport(width: f64, height: f64) -> Editor {
		init_logger();
		let mut editor = Editor::new();
		let _ = editor.test_set_viewport(width, height);
		editor
	}

	fn test_set_viewport(&mut self, width: f64, height: f64) -> Vec<FrontendMessage> {
		self.handle_message(InputPreprocessorMessage::BoundsOfViewport {
			bounds: ViewportBounds {
				left: 0.,
				top: 0.,
				width,
				height,
				device_pixel_ratio: 1.,
			},
		})
	}

	fn test_pointer_move(&mut self, x: f64, y: f64) -> Vec<FrontendMessage> {
		self.handle_message(InputPreprocessorMessage::PointerMove {
			position: DVec2::new(x, y),
			modifier_keys: ModifierKeys::empty(),
		})
	}

	fn test_wheel(&mut self, wheel_delta: f64, modifier_keys: ModifierKeys) -> Vec<FrontendMessage> {
		self.handle_message(InputPreprocessorMessage::WheelScroll { wheel_delta, modifier_keys })
	}
}
