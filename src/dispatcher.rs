use crate::config::EditorConfig;
use crate::messages::prelude::*;

/// Routes every queued [`Message`] to its subsystem handler until the queue drains.
/// Handlers enqueue follow-up messages onto the same queue; [`FrontendMessage`]s fall
/// out of the loop into `responses` for the embedding host to collect.
#[derive(Debug, Default)]
pub struct Dispatcher {
	message_queue: VecDeque<Message>,
	pub responses: Vec<FrontendMessage>,
	pub message_handlers: DispatcherMessageHandlers,
	pub config: EditorConfig,
}

#[derive(Debug, Default)]
pub struct DispatcherMessageHandlers {
	pub guide_message_handler: GuideMessageHandler,
	pub input_preprocessor_message_handler: InputPreprocessorMessageHandler,
	pub navigation_message_handler: NavigationMessageHandler,
	pub tool_message_handler: ToolMessageHandler,
}

impl Dispatcher {
	pub fn with_config(config: EditorConfig) -> Self {
		Self { config, ..Self::default() }
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) {
		self.message_queue.push_back(message.into());

		while let Some(message) = self.message_queue.pop_front() {
			trace!("Dispatching {message:?}");

			// Destructured so each arm can borrow its context handlers disjointly.
			let DispatcherMessageHandlers {
				guide_message_handler,
				input_preprocessor_message_handler,
				navigation_message_handler,
				tool_message_handler,
			} = &mut self.message_handlers;
			let queue = &mut self.message_queue;

			match message {
				Message::NoOp => {}
				Message::Init => {
					// A configured zoom of -1 requests an initial fit to the viewport.
					queue.add(NavigationMessage::SetZoom { zoom: self.config.zoom });
				}
				Message::Frontend(message) => {
					self.responses.push(message);
				}
				Message::Guide(message) => {
					let context = GuideMessageContext {
						view: &navigation_message_handler.view,
						ipp: input_preprocessor_message_handler,
					};
					guide_message_handler.process_message(message, queue, context);
				}
				Message::InputPreprocessor(message) => {
					let context = InputPreprocessorMessageContext { config: &self.config };
					input_preprocessor_message_handler.process_message(message, queue, context);
				}
				Message::Navigation(message) => {
					let context = NavigationMessageContext {
						config: &self.config,
						ipp: input_preprocessor_message_handler,
					};
					navigation_message_handler.process_message(message, queue, context);
				}
				Message::Tool(message) => {
					let context = ToolMessageContext {
						config: &self.config,
						ipp: input_preprocessor_message_handler,
						view: &navigation_message_handler.view,
						guides: guide_message_handler,
					};
					tool_message_handler.process_message(message, queue, context);
				}
			}
		}
	}
}
