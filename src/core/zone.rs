//! Symbolic swipe zones.
//!
//! A zone is derived from the card's current offset, never stored as truth.
//! Left swipes reveal `Teil` (partial withdrawal) then `Alles` (everything),
//! a right swipe reveals `Edit`.

use serde::{Deserialize, Serialize};

use super::error::SwipeError;

/// Zone a card offset falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Resting center, no action.
    #[default]
    None,
    /// Partial withdrawal (left, first stop).
    Teil,
    /// Full withdrawal (left, second stop).
    Alles,
    /// Edit the item (right).
    Edit,
}

impl Zone {
    /// The three zones that commit an action.
    pub const ACTIONS: [Zone; 3] = [Zone::Teil, Zone::Alles, Zone::Edit];

    /// Returns true for every zone except `None`.
    #[must_use]
    pub const fn is_action(self) -> bool {
        !matches!(self, Zone::None)
    }

    /// Returns true for zones revealed by a left swipe.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Zone::Teil | Zone::Alles)
    }

    /// Name used on action elements (`data-action="teil"`).
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Zone::None => "none",
            Zone::Teil => "teil",
            Zone::Alles => "alles",
            Zone::Edit => "edit",
        }
    }

    /// Name of the host callback this zone maps to.
    ///
    /// Returns `None` for `Zone::None`.
    #[must_use]
    pub const fn host_action(self) -> Option<&'static str> {
        match self {
            Zone::None => None,
            Zone::Teil => Some("partial"),
            Zone::Alles => Some("consume_all"),
            Zone::Edit => Some("edit"),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for Zone {
    type Err = SwipeError;

    /// Parses either the wire name or the host action name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Zone::None),
            "teil" | "partial" => Ok(Zone::Teil),
            "alles" | "consume_all" => Ok(Zone::Alles),
            "edit" => Ok(Zone::Edit),
            other => Err(SwipeError::UnknownZone(other.to_string())),
        }
    }
}
