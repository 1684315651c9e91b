//! Base trait for intents (user/system actions) and their kind tags.

use std::fmt::Debug;

/// A dispatchable intent with a runtime-identifiable kind.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
///
/// An implementing type is typically an enum whose variants carry
/// their payloads; [`Kind`](Intent::Kind) is a payload-free companion
/// enum used as the trigger tag commands register against. Commands
/// receive the whole intent and read the payload out of the matched
/// variant themselves.
pub trait Intent {
    /// Payload-free discriminator for this intent's variants.
    type Kind: PartialEq + Copy + Debug;

    /// The kind tag of this particular intent value.
    fn kind(&self) -> Self::Kind;
}
