use crate::messages::guides::utility_types::GuideAxis;

#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum GuideMessage {
	/// Creates a guide from a click on the ruler, converting the screen position into a
	/// logical coordinate with the current pan and zoom.
	AddAtRulerPosition { axis: GuideAxis, position: f64 },
	AddGuide { axis: GuideAxis, position: f64 },
	MoveGuide { axis: GuideAxis, from: f64, to: f64 },
	RemoveGuide { axis: GuideAxis, position: f64 },
}
