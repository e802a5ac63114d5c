use crate::messages::prelude::*;
use serde::{Deserialize, Serialize};

/// The root message enum. Every subsystem's message type folds into a variant here so
/// that any message can travel through the single dispatcher queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
	NoOp,
	Init,

	Frontend(FrontendMessage),
	Guide(GuideMessage),
	InputPreprocessor(InputPreprocessorMessage),
	Navigation(NavigationMessage),
	Tool(ToolMessage),
}

macro_rules! impl_from_message {
	($($child:ident => $variant:ident),* $(,)?) => {
		$(
			impl From<$child> for Message {
				fn from(message: $child) -> Self {
					Message::$variant(message)
				}
			}
		)*
	};
}

impl_from_message!(
	FrontendMessage => Frontend,
	GuideMessage => Guide,
	InputPreprocessorMessage => InputPreprocessor,
	NavigationMessage => Navigation,
	ToolMessage => Tool,
);
