use crate::messages::guides::utility_types::GuideAxis;
use crate::messages::navigation::utility_types::Tick;
use crate::messages::tool::common_functionality::snapping::SnapDirective;

use serde::{Deserialize, Serialize};

/// Messages dispatched to the hosting UI layer; the terminal output of every engine operation.
/// Variants with an `Update` prefix replace host-side state wholesale; `Trigger` variants ask
/// the host to perform a one-off action.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum FrontendMessage {
	TriggerDropCompleted {
		left: f64,
		top: f64,
		unit: f64,
	},
	UpdateChasingPosition {
		left: f64,
		top: f64,
	},
	UpdateGuides {
		axis: GuideAxis,
		positions: Vec<f64>,
	},
	UpdatePan {
		pan: (f64, f64),
	},
	UpdateRulerIndicator {
		axis: GuideAxis,
		position: f64,
		value: f64,
		visible: bool,
	},
	UpdateRulerTicks {
		ticks: Vec<Tick>,
	},
	UpdateSnapOverlay {
		directives: Vec<SnapDirective>,
	},
	UpdateZoom {
		zoom: f64,
		unit: f64,
	},
}
