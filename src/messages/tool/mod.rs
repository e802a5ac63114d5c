pub mod common_functionality;
pub mod tool_message;
pub mod tool_message_handler;

#[doc(inline)]
pub use tool_message::ToolMessage;
#[doc(inline)]
pub use tool_message_handler::ToolMessageHandler;
