//! The geometry core of an embeddable canvas editor panel: zoom and unit conversion,
//! ruler tick generation, draggable alignment guides, and snap detection for shapes
//! dragged onto or within a page.
//!
//! The hosting UI forwards raw pointer/wheel events and shape geometry as [`Message`]s
//! into an [`Editor`] session and renders the returned [`FrontendMessage`]s; the core
//! never touches rendering primitives.
//!
//! [`Message`]: messages::message::Message
//! [`FrontendMessage`]: messages::frontend::FrontendMessage

#[macro_use]
extern crate log;

pub mod application;
pub mod config;
pub mod consts;
pub mod dispatcher;
pub mod error;
pub mod messages;
#[cfg(test)]
pub mod test_utils;
pub mod utility_traits;

#[doc(inline)]
pub use application::Editor;
#[doc(inline)]
pub use config::EditorConfig;
#[doc(inline)]
pub use error::EditorError;
