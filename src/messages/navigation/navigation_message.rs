use crate::messages::guides::utility_types::GuideAxis;

use glam::DVec2;

#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum NavigationMessage {
	CanvasPan { delta: DVec2 },
	CanvasPanMouseWheel { wheel_delta: f64, use_y_as_x: bool },
	CanvasZoomMouseWheel { wheel_delta: f64 },
	FitToViewport,
	RulerHover { axis: GuideAxis, position: f64 },
	RulerLeave { axis: GuideAxis },
	SetZoom { zoom: f64 },
	ViewportResized,
}
