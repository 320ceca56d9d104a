//! Single-open-card exclusivity.
//!
//! At most one card may be open (dragging or resting at a stop) at a time.
//! The registry only records who holds the slot; the engine performs the
//! forced close of a displaced holder before the new card takes input.
//!
//! The registry is injected into the engine rather than living in a global,
//! so tests get a fresh one and harnesses can switch the policy off with
//! [`NoExclusivity`].
//!
//! ## Example
//!
//! ```
//! use rust_swipe::core::CardId;
//! use rust_swipe::exclusivity::{OpenCardRegistry, SingleOpenRegistry};
//!
//! let mut registry = SingleOpenRegistry::new();
//! let (a, b) = (CardId::new(1), CardId::new(2));
//!
//! assert_eq!(registry.claim(a), None);
//! assert_eq!(registry.claim(b), Some(a)); // a must now be closed
//!
//! assert!(!registry.release(a)); // stale release is a no-op
//! assert_eq!(registry.holder(), Some(b));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// The `claim`/`release` contract for the open-card slot.
pub trait OpenCardRegistry {
    /// Record `card` as the open card.
    ///
    /// Returns the previous holder when it was a different card. The caller
    /// must force that card closed before `card` accepts drag input.
    fn claim(&mut self, card: CardId) -> Option<CardId>;

    /// Clear the slot if `card` holds it. Returns whether it did.
    fn release(&mut self, card: CardId) -> bool;

    /// Current holder.
    fn holder(&self) -> Option<CardId>;

    /// Forget the holder without closing anything.
    fn clear(&mut self);
}

/// Registry enforcing the single-open-card policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleOpenRegistry {
    open: Option<CardId>,
}

impl SingleOpenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpenCardRegistry for SingleOpenRegistry {
    fn claim(&mut self, card: CardId) -> Option<CardId> {
        let previous = self.open.replace(card);
        previous.filter(|&p| p != card)
    }

    fn release(&mut self, card: CardId) -> bool {
        if self.open == Some(card) {
            self.open = None;
            true
        } else {
            false
        }
    }

    fn holder(&self) -> Option<CardId> {
        self.open
    }

    fn clear(&mut self) {
        self.open = None;
    }
}

/// Registry that never displaces anyone. Any number of cards may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoExclusivity;

impl OpenCardRegistry for NoExclusivity {
    fn claim(&mut self, _card: CardId) -> Option<CardId> {
        None
    }

    fn release(&mut self, _card: CardId) -> bool {
        false
    }

    fn holder(&self) -> Option<CardId> {
        None
    }

    fn clear(&mut self) {}
}
