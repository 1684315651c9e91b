//! Command-mapping reducer for unidirectional state containers.
//!
//! This crate provides the dispatch half of a Model-View-Intent style
//! state container: an ordered registry of (trigger-kind, command)
//! mappings folded over the current state whenever an intent arrives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ CommandReducer ──→ State ──→ Host store
//!                 │
//!                 └─ ordered (trigger-kind, command) registry
//! ```
//!
//! - **Intent**: a user action or system event carrying a runtime kind
//! - **Command**: a pure function computing the next state from the
//!   current state and the matched intent
//! - **CommandReducer**: applies every command whose trigger-kind
//!   matches, in registration order
//!
//! The hosting store, intent delivery, and rendering are the caller's
//! concern; this crate only decides which commands run and in what
//! order.
//!
//! # Example
//!
//! ```
//! use command_reducer::{CommandReducer, Intent};
//!
//! #[derive(Debug)]
//! enum CounterIntent {
//!     Add(i64),
//!     Clear,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum CounterKind {
//!     Add,
//!     Clear,
//! }
//!
//! impl Intent for CounterIntent {
//!     type Kind = CounterKind;
//!
//!     fn kind(&self) -> CounterKind {
//!         match self {
//!             CounterIntent::Add(_) => CounterKind::Add,
//!             CounterIntent::Clear => CounterKind::Clear,
//!         }
//!     }
//! }
//!
//! let reducer = CommandReducer::new(0i64)
//!     .add(CounterKind::Add, |count, intent: &CounterIntent| {
//!         match intent {
//!             CounterIntent::Add(amount) => count + amount,
//!             _ => count,
//!         }
//!     })
//!     .add(CounterKind::Clear, |_, _| 0);
//!
//! assert_eq!(reducer.dispatch(None, &CounterIntent::Add(5)), 5);
//! assert_eq!(reducer.dispatch(Some(5), &CounterIntent::Clear), 0);
//! assert_eq!(reducer.dispatch(Some(5), &CounterIntent::Add(2)), 7);
//! ```

mod command;
mod intent;
mod reducer;

pub use command::{Command, Mapping};
pub use intent::Intent;
pub use reducer::CommandReducer;
