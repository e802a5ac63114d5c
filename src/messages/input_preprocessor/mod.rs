pub mod input_preprocessor_message;
pub mod input_preprocessor_message_handler;
pub mod utility_types;

#[doc(inline)]
pub use input_preprocessor_message::InputPreprocessorMessage;
#[doc(inline)]
pub use input_preprocessor_message_handler::InputPreprocessorMessageHandler;
