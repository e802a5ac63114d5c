use crate::messages::guides::utility_types::{GuideAxis, GuideSet};
use crate::messages::input_preprocessor::input_preprocessor_message_handler::InputPreprocessorMessageHandler;
use crate::messages::navigation::utility_types::{ViewState, round_half_up};
use crate::messages::prelude::*;

pub struct GuideMessageContext<'a> {
	pub view: &'a ViewState,
	pub ipp: &'a InputPreprocessorMessageHandler,
}

/// Stores the session's alignment guides, one set per axis, in logical coordinates.
/// Every mutation republishes the full position list for the affected axis so the
/// frontend can redraw its guide layer statelessly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideMessageHandler {
	pub guides_x: GuideSet,
	pub guides_y: GuideSet,
}

impl MessageHandler<GuideMessage, GuideMessageContext<'_>> for GuideMessageHandler {
	fn process_message(&mut self, message: GuideMessage, responses: &mut VecDeque<Message>, context: GuideMessageContext) {
		let GuideMessageContext { view, ipp } = context;

		let axis = match message {
			GuideMessage::AddAtRulerPosition { axis, position } => {
				let (pan, offset) = match axis {
					GuideAxis::X => (view.pan.x, ipp.left_offset),
					GuideAxis::Y => (view.pan.y, ipp.top_offset),
				};
				let relative = position - pan - offset;
				let logical = round_half_up((relative - ipp.start_margin_zoom) * view.unit);
				self.guides_mut(axis).add(logical);
				axis
			}
			GuideMessage::AddGuide { axis, position } => {
				self.guides_mut(axis).add(position);
				axis
			}
			GuideMessage::MoveGuide { axis, from, to } => {
				self.guides_mut(axis).relocate(from, to);
				axis
			}
			GuideMessage::RemoveGuide { axis, position } => {
				self.guides_mut(axis).remove(position);
				axis
			}
		};

		responses.add(FrontendMessage::UpdateGuides {
			axis,
			positions: self.guides(axis).positions().to_vec(),
		});
	}
}

impl GuideMessageHandler {
	pub fn guides(&self, axis: GuideAxis) -> &GuideSet {
		match axis {
			GuideAxis::X => &self.guides_x,
			GuideAxis::Y => &self.guides_y,
		}
	}

	fn guides_mut(&mut self, axis: GuideAxis) -> &mut GuideSet {
		match axis {
			GuideAxis::X => &mut self.guides_x,
			GuideAxis::Y => &mut self.guides_y,
		}
	}
}
