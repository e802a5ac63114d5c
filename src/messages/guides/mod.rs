pub mod guide_message;
pub mod guide_message_handler;
pub mod utility_types;

#[doc(inline)]
pub use guide_message::GuideMessage;
#[doc(inline)]
pub use guide_message_handler::GuideMessageHandler;
