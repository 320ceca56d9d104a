//! Action dispatch and host-facing events.
//!
//! The engine reports everything through an outbox of [`SwipeEvent`]s. Only
//! [`SwipeEvent::Action`] carries business meaning; the rest is visual
//! feedback. Each committed gesture produces exactly one `Action`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, Zone};

/// What committed an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitSource {
    /// A zone was held for the dwell time.
    Dwell,
    /// A release past the swipe-through bound or a flick past the stop.
    SwipeThrough,
    /// Direct tap on the zone's action element.
    Activation,
}

/// Event emitted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SwipeEvent {
    /// A committed action. `zone` is never `Zone::None`.
    Action {
        card: CardId,
        zone: Zone,
        source: CommitSource,
    },

    /// The card's content layer moved.
    OffsetChanged {
        card: CardId,
        offset_px: f32,
        animated: bool,
    },

    /// Start the dwell ring on `zone`'s action element.
    ProgressStarted {
        card: CardId,
        zone: Zone,
        duration_ms: u64,
    },

    /// Reset `zone`'s dwell ring to empty.
    ProgressCleared { card: CardId, zone: Zone },

    /// An open card was closed by exclusivity, click-outside or the host.
    Closed { card: CardId },
}

impl SwipeEvent {
    /// Card the event concerns.
    #[must_use]
    pub fn card(&self) -> CardId {
        match *self {
            SwipeEvent::Action { card, .. }
            | SwipeEvent::OffsetChanged { card, .. }
            | SwipeEvent::ProgressStarted { card, .. }
            | SwipeEvent::ProgressCleared { card, .. }
            | SwipeEvent::Closed { card } => card,
        }
    }

    /// `(card, zone)` for action events.
    #[must_use]
    pub fn as_action(&self) -> Option<(CardId, Zone)> {
        match *self {
            SwipeEvent::Action { card, zone, .. } => Some((card, zone)),
            _ => None,
        }
    }
}

type Handler = Box<dyn FnMut(CardId)>;

/// Optional per-action callbacks for one card.
///
/// Missing callbacks are no-ops.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use rust_swipe::core::{CardId, Zone};
/// use rust_swipe::engine::ActionHandlers;
///
/// let edits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&edits);
/// let mut handlers = ActionHandlers::new().on_edit(move |_| counter.set(counter.get() + 1));
///
/// assert!(handlers.handle(CardId::new(1), Zone::Edit));
/// assert!(!handlers.handle(CardId::new(1), Zone::Teil));
/// assert_eq!(edits.get(), 1);
/// ```
#[derive(Default)]
pub struct ActionHandlers {
    on_partial: Option<Handler>,
    on_consume_all: Option<Handler>,
    on_edit: Option<Handler>,
}

impl ActionHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback for `teil`.
    #[must_use]
    pub fn on_partial(mut self, f: impl FnMut(CardId) + 'static) -> Self {
        self.on_partial = Some(Box::new(f));
        self
    }

    /// Callback for `alles`.
    #[must_use]
    pub fn on_consume_all(mut self, f: impl FnMut(CardId) + 'static) -> Self {
        self.on_consume_all = Some(Box::new(f));
        self
    }

    /// Callback for `edit`.
    #[must_use]
    pub fn on_edit(mut self, f: impl FnMut(CardId) + 'static) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    /// Invoke the callback for `zone`. Returns whether one ran.
    pub fn handle(&mut self, card: CardId, zone: Zone) -> bool {
        let handler = match zone {
            Zone::Teil => self.on_partial.as_mut(),
            Zone::Alles => self.on_consume_all.as_mut(),
            Zone::Edit => self.on_edit.as_mut(),
            Zone::None => None,
        };
        match handler {
            Some(f) => {
                f(card);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for ActionHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionHandlers")
            .field("on_partial", &self.on_partial.is_some())
            .field("on_consume_all", &self.on_consume_all.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .finish()
    }
}

/// Routes drained action events to per-card handlers.
#[derive(Debug, Default)]
pub struct ActionRouter {
    handlers: FxHashMap<CardId, ActionHandlers>,
}

impl ActionRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register handlers for `card`, replacing any previous ones.
    pub fn insert(&mut self, card: CardId, handlers: ActionHandlers) {
        self.handlers.insert(card, handlers);
    }

    pub fn remove(&mut self, card: CardId) -> Option<ActionHandlers> {
        self.handlers.remove(&card)
    }

    /// Deliver every action event. Returns how many handlers ran.
    pub fn route<'a>(&mut self, events: impl IntoIterator<Item = &'a SwipeEvent>) -> usize {
        let mut delivered = 0;
        for (card, zone) in events.into_iter().filter_map(SwipeEvent::as_action) {
            if let Some(handlers) = self.handlers.get_mut(&card) {
                if handlers.handle(card, zone) {
                    delivered += 1;
                }
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_event_card() {
        let ev = SwipeEvent::Closed { card: CardId(4) };
        assert_eq!(ev.card(), CardId(4));
        assert_eq!(ev.as_action(), None);

        let ev = SwipeEvent::Action {
            card: CardId(2),
            zone: Zone::Alles,
            source: CommitSource::Dwell,
        };
        assert_eq!(ev.as_action(), Some((CardId(2), Zone::Alles)));
    }

    #[test]
    fn test_missing_handler_is_noop() {
        let mut handlers = ActionHandlers::new();
        assert!(!handlers.handle(CardId(1), Zone::Teil));
        assert!(!handlers.handle(CardId(1), Zone::None));
    }

    #[test]
    fn test_router_delivers_to_owner() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut router = ActionRouter::new();
        let l1 = Rc::clone(&log);
        router.insert(
            CardId(1),
            ActionHandlers::new().on_partial(move |c| l1.borrow_mut().push(("partial", c))),
        );
        let l2 = Rc::clone(&log);
        router.insert(
            CardId(2),
            ActionHandlers::new().on_consume_all(move |c| l2.borrow_mut().push(("consume_all", c))),
        );

        let events = [
            SwipeEvent::OffsetChanged {
                card: CardId(1),
                offset_px: -80.0,
                animated: false,
            },
            SwipeEvent::Action {
                card: CardId(2),
                zone: Zone::Alles,
                source: CommitSource::SwipeThrough,
            },
            SwipeEvent::Action {
                card: CardId(1),
                zone: Zone::Teil,
                source: CommitSource::Dwell,
            },
            SwipeEvent::Action {
                card: CardId(1),
                zone: Zone::Edit,
                source: CommitSource::Activation,
            },
        ];

        assert_eq!(router.route(&events), 2);
        assert_eq!(
            *log.borrow(),
            vec![("consume_all", CardId(2)), ("partial", CardId(1))]
        );
    }

    #[test]
    fn test_serialization() {
        let ev = SwipeEvent::Action {
            card: CardId(7),
            zone: Zone::Edit,
            source: CommitSource::Activation,
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: SwipeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
