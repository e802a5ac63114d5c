use crate::messages::prelude::*;

/// Implements a message handler struct for a separate message enum.
/// - The first generic argument (`M`) is the message enum matched and handled in `process_message()`.
/// - The second generic argument (`C`) is the context borrowed from the dispatcher for the duration of the call.
pub trait MessageHandler<M, C> {
	fn process_message(&mut self, message: M, responses: &mut VecDeque<Message>, context: C);
}
