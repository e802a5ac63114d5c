pub mod navigation_message;
pub mod navigation_message_handler;
pub mod utility_types;

#[doc(inline)]
pub use navigation_message::NavigationMessage;
#[doc(inline)]
pub use navigation_message_handler::NavigationMessageHandler;
