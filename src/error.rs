use thiserror::Error;

/// The error type used by the easel editor core.
///
/// Numeric operations in the core are total and clamp silently, so the only failure
/// surfaced to callers is a programming-contract violation at the host boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EditorError {
	#[error("'{0}' is not a guide axis (expected \"h\"/\"x\" or \"v\"/\"y\")")]
	InvalidAxis(String),
}
