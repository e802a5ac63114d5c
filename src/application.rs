use crate::config::EditorConfig;
use crate::dispatcher::Dispatcher;
use crate::messages::prelude::*;

/// One embeddable editor session. The host feeds input and shape geometry in through
/// [`Self::handle_message`] and renders the [`FrontendMessage`]s that come back; all
/// session state lives behind the dispatcher's handlers.
#[derive(Debug, Default)]
pub struct Editor {
	pub dispatcher: Dispatcher,
}

impl Editor {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: EditorConfig) -> Self {
		Self {
			dispatcher: Dispatcher::with_config(config),
		}
	}

	#[must_use]
	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message);
		std::mem::take(&mut self.dispatcher.responses)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::messages::guides::utility_types::GuideAxis;
	use crate::messages::tool::common_functionality::snapping::Rect;
	use crate::test_utils::EditorTestSupport;

	#[test]
	fn responses_are_drained_per_call() {
		let mut editor = Editor::test_with_viewport(1280., 720.);

		let responses = editor.handle_message(NavigationMessage::SetZoom { zoom: 100. });
		assert!(!responses.is_empty());

		let responses = editor.handle_message(Message::NoOp);
		assert!(responses.is_empty());
	}

	#[test]
	fn custom_config_drives_the_session() {
		let config = EditorConfig {
			screen_width: 800.,
			screen_height: 600.,
			zoom: 100.,
			..Default::default()
		};
		let mut editor = Editor::with_config(config);
		let _ = editor.test_set_viewport(1280., 720.);

		let responses = editor.handle_message(Message::Init);

		// The configured zoom of 100 skips the fit and applies directly.
		assert!(responses.iter().any(|response| matches!(response, FrontendMessage::UpdateZoom { zoom, unit } if *zoom == 100. && *unit == 1.)));
		assert_eq!(editor.dispatcher.message_handlers.navigation_message_handler.view.zoom_page_width, 800.);
	}

	#[test]
	fn a_full_session_round_trip() {
		let mut editor = Editor::test_with_viewport(1280., 720.);
		let _ = editor.handle_message(NavigationMessage::SetZoom { zoom: 100. });

		let _ = editor.handle_message(GuideMessage::AddGuide { axis: GuideAxis::X, position: 300. });
		let _ = editor.handle_message(ToolMessage::DragStart {
			target: Some(Rect::new(299., 500., 50., 50.)),
		});
		let responses = editor.test_pointer_move(200., 200.);

		assert!(responses.iter().any(|response| matches!(response, FrontendMessage::UpdateChasingPosition { left, top } if *left == 300. && *top == -1.)));
	}
}
