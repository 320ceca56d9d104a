//! Card identification.
//!
//! Every swipe card mounted in an engine has a unique `CardId`. Hosts
//! normally supply their own stable ids (one per list row); the engine can
//! also allocate fresh ones.
//!
//! ```
//! use rust_swipe::core::CardId;
//!
//! let card = CardId::new(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(card.to_string(), "Card(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a mounted swipe card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Element id used by web hosts (`swipe-card-0000002a`).
    #[must_use]
    pub fn dom_id(self) -> String {
        format!("swipe-card-{:08x}", self.0)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
