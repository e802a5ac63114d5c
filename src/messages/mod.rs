//! The root-level messages forming the first layer of the message system architecture.

pub mod frontend;
pub mod guides;
pub mod input_preprocessor;
pub mod message;
pub mod navigation;
pub mod prelude;
pub mod tool;
