//! Command-mapping reducer: registration, dispatch, substitution.

use std::fmt;
use std::sync::Arc;

use crate::command::{Command, Mapping};
use crate::intent::Intent;

/// Maps intent kinds to commands and folds every matching command over
/// the state in registration order.
///
/// Built once through a chain of [`add`](Self::add) /
/// [`add_command`](Self::add_command) calls, then either queried with
/// [`dispatch`](Self::dispatch) or frozen into the bare reducer
/// function with [`into_reducer`](Self::into_reducer).
///
/// The reducer itself is stateless between calls; all state lives in
/// the value the host passes to each dispatch.
pub struct CommandReducer<S, I: Intent> {
    default_state: S,
    mappings: Vec<Mapping<S, I>>,
}

impl<S: Clone, I: Intent> CommandReducer<S, I> {
    /// Create a reducer with an empty registry.
    ///
    /// `default_state` is substituted whenever [`dispatch`](Self::dispatch)
    /// receives `None` as the current state.
    pub fn new(default_state: S) -> Self {
        Self {
            default_state,
            mappings: Vec::new(),
        }
    }

    /// Register a command for a trigger-kind.
    ///
    /// Returns `self` so registrations chain. Registering the same kind
    /// twice is legal; both commands apply, in registration order.
    pub fn add<F>(self, kind: I::Kind, command: F) -> Self
    where
        F: Fn(S, &I) -> S + Send + Sync + 'static,
    {
        self.add_command(kind, Arc::new(command))
    }

    /// Register an already-shared [`Command`] handle.
    ///
    /// Keep a clone of the handle if the command should later be a
    /// [`substitute`](Self::substitute) target; commands registered
    /// through [`add`](Self::add) cannot be named afterwards.
    pub fn add_command(mut self, kind: I::Kind, command: Command<S, I>) -> Self {
        self.mappings.push(Mapping { kind, command });
        self
    }

    /// Compute the next state for an intent.
    ///
    /// `None` as the current state means "uninitialized" and is
    /// replaced with the default state before any command runs. Every
    /// mapping whose kind matches the intent's kind then applies, in
    /// registration order, each consuming the previous output. When
    /// nothing matches, the (possibly defaulted) input moves through
    /// unchanged.
    ///
    /// A panicking command unwinds to the caller uncaught.
    pub fn dispatch(&self, state: Option<S>, intent: &I) -> S {
        let state = match state {
            Some(state) => state,
            None => {
                tracing::trace!("No current state, substituting default");
                self.default_state.clone()
            }
        };

        self.mappings.iter().fold(state, |prev, mapping| {
            if intent.kind() == mapping.kind {
                tracing::trace!(kind = ?mapping.kind, "Applying command");
                (mapping.command)(prev, intent)
            } else {
                prev
            }
        })
    }

    /// Swap a registered command for a replacement, in place.
    ///
    /// Every mapping whose command is the same allocation as
    /// `original` (compared with [`Arc::ptr_eq`]) is updated; kinds and
    /// registry order are untouched. Returns the kinds of the mappings
    /// changed, in registry order — empty when nothing matched, which
    /// is not an error.
    ///
    /// Test-support hook for intercepting a specific command's
    /// invocations. Takes `&mut self`, so it cannot race a dispatch.
    pub fn substitute(
        &mut self,
        original: &Command<S, I>,
        replacement: Command<S, I>,
    ) -> Vec<I::Kind> {
        let mut replaced = Vec::new();
        for mapping in &mut self.mappings {
            if Arc::ptr_eq(&mapping.command, original) {
                mapping.command = Arc::clone(&replacement);
                replaced.push(mapping.kind);
            }
        }
        tracing::debug!(count = replaced.len(), "Substituted command");
        replaced
    }

    /// Freeze the registry into the bare `(state, intent) -> state`
    /// function the hosting store consumes.
    ///
    /// Consumes the builder; substitution must happen before freezing.
    pub fn into_reducer(self) -> impl Fn(Option<S>, &I) -> S {
        move |state, intent| self.dispatch(state, intent)
    }

    /// Number of registered mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<S, I: Intent> fmt::Debug for CommandReducer<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandReducer")
            .field(
                "kinds",
                &self.mappings.iter().map(Mapping::kind).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
