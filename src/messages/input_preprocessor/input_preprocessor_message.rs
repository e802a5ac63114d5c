use crate::messages::input_preprocessor::utility_types::{ModifierKeys, ViewportBounds};

use glam::DVec2;

#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum InputPreprocessorMessage {
	BoundsOfViewport { bounds: ViewportBounds },
	PointerMove { position: DVec2, modifier_keys: ModifierKeys },
	WheelScroll { wheel_delta: f64, modifier_keys: ModifierKeys },
}
