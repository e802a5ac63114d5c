pub use crate::messages::frontend::FrontendMessage;
pub use crate::messages::guides::guide_message::GuideMessage;
pub use crate::messages::guides::guide_message_handler::{GuideMessageContext, GuideMessageHandler};
pub use crate::messages::input_preprocessor::input_preprocessor_message::InputPreprocessorMessage;
pub use crate::messages::input_preprocessor::input_preprocessor_message_handler::{InputPreprocessorMessageContext, InputPreprocessorMessageHandler};
pub use crate::messages::message::Message;
pub use crate::messages::navigation::navigation_message::NavigationMessage;
pub use crate::messages::navigation::navigation_message_handler::{NavigationMessageContext, NavigationMessageHandler};
pub use crate::messages::tool::tool_message::ToolMessage;
pub use crate::messages::tool::tool_message_handler::{ToolMessageContext, ToolMessageHandler};
pub use crate::utility_traits::MessageHandler;

pub use std::collections::VecDeque;

/// Allows appending to the dispatcher queue as `responses.add(message)` for any child message type.
pub trait Responses {
	fn add(&mut self, message: impl Into<Message>);
	fn add_front(&mut self, message: impl Into<Message>);
}

impl Responses for VecDeque<Message> {
	fn add(&mut self, message: impl Into<Message>) {
		self.push_back(message.into());
	}

	fn add_front(&mut self, message: impl Into<Message>) {
		self.push_front(message.into());
	}
}
