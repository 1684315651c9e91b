//! Command functions and their trigger-kind mappings.

use std::sync::Arc;

use crate::intent::Intent;

/// A state transformation invoked when its trigger-kind matches.
///
/// Commands must be pure: consume the current state, return the next
/// one. Shared ownership (`Arc`) gives [`substitute`] a well-defined
/// identity to match on via [`Arc::ptr_eq`].
///
/// [`substitute`]: crate::CommandReducer::substitute
pub type Command<S, I> = Arc<dyn Fn(S, &I) -> S + Send + Sync>;

/// One registry entry: a trigger-kind paired with its command.
pub struct Mapping<S, I: Intent> {
    pub(crate) kind: I::Kind,
    pub(crate) command: Command<S, I>,
}

impl<S, I: Intent> Mapping<S, I> {
    /// The trigger-kind this mapping responds to.
    pub fn kind(&self) -> I::Kind {
        self.kind
    }
}
