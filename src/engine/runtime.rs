//! The swipe engine: owns every mounted card and sequences the gesture
//! pipeline.

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;

use crate::core::{CardConfig, CardId, Result, SwipeError, Zone};
use crate::dwell::{
    DwellCommand, DwellCommands, DwellScheduler, DwellTimer, DwellToken, DwellTokens,
    PollScheduler, VirtualScheduler,
};
use crate::exclusivity::{OpenCardRegistry, SingleOpenRegistry};
use crate::gesture::{snap, swipe_through, PointerEvent, PointerPhase};

use super::card::{CardView, SwipeCard};
use super::dispatch::{CommitSource, SwipeEvent};

/// Gesture engine for a set of swipe cards.
///
/// Single-threaded and host-driven: every call runs to completion and
/// leaves the engine consistent. Time is passed in as `now_ms` from the
/// host's clock. Output accumulates in an outbox read with
/// [`drain_events`](Self::drain_events).
///
/// ## Usage
///
/// ```
/// use rust_swipe::core::{CardConfig, CardId, Zone};
/// use rust_swipe::engine::SwipeEngine;
/// use rust_swipe::gesture::PointerEvent;
///
/// let mut engine = SwipeEngine::with_virtual_clock();
/// let card = CardId::new(1);
/// engine.mount(card, CardConfig::default()).unwrap();
/// engine.set_width(card, 300.0).unwrap();
///
/// engine.pointer(card, PointerEvent::down(300.0), 0).unwrap();
/// engine.pointer(card, PointerEvent::moved(140.0), 16).unwrap();
/// engine.advance(316);
///
/// let actions: Vec<_> = engine
///     .drain_events()
///     .iter()
///     .filter_map(|e| e.as_action())
///     .collect();
/// assert_eq!(actions, vec![(card, Zone::Alles)]);
/// assert_eq!(engine.card(card).unwrap().offset_px(), 0.0);
/// ```
#[derive(Debug)]
pub struct SwipeEngine<S = VirtualScheduler, R = SingleOpenRegistry> {
    cards: FxHashMap<CardId, SwipeCard>,
    scheduler: S,
    registry: R,
    events: Vec<SwipeEvent>,
    next_auto_id: u32,

    /// Token issuer shared by every card, across remounts of the same id.
    tokens: DwellTokens,
}

impl SwipeEngine<VirtualScheduler, SingleOpenRegistry> {
    /// Engine with a manually advanced clock and the single-open policy.
    #[must_use]
    pub fn with_virtual_clock() -> Self {
        Self::new(VirtualScheduler::new(), SingleOpenRegistry::new())
    }
}

impl<S: DwellScheduler, R: OpenCardRegistry> SwipeEngine<S, R> {
    /// Create an engine from an injected scheduler and registry.
    pub fn new(scheduler: S, registry: R) -> Self {
        Self {
            cards: FxHashMap::default(),
            scheduler,
            registry,
            events: Vec::new(),
            next_auto_id: 0,
            tokens: DwellTokens::new(),
        }
    }

    // === Lifecycle ===

    /// Mount a card. The config is validated here.
    pub fn mount(&mut self, id: CardId, config: CardConfig) -> Result<()> {
        if self.cards.contains_key(&id) {
            return Err(SwipeError::DuplicateCard(id));
        }
        if let Err(source) = config.validate() {
            warn!("rejecting config for {id}: {source}");
            return Err(SwipeError::Config { card: id, source });
        }
        self.cards.insert(id, SwipeCard::new(id, config));
        trace!("mounted {id}");
        Ok(())
    }

    /// Mount a card under a freshly allocated id.
    pub fn mount_auto(&mut self, config: CardConfig) -> Result<CardId> {
        let mut id = CardId::new(self.next_auto_id);
        while self.cards.contains_key(&id) {
            id = CardId::new(id.raw().wrapping_add(1));
        }
        self.next_auto_id = id.raw().wrapping_add(1);
        self.mount(id, config)?;
        Ok(id)
    }

    /// Unmount a card. Its pending dwell timer is cancelled first.
    pub fn unmount(&mut self, id: CardId) -> Result<()> {
        let mut card = self.cards.remove(&id).ok_or(SwipeError::UnknownCard(id))?;
        let commands = card.dwell_mut().cancel();
        for command in commands {
            if let DwellCommand::Cancel { token, .. } = command {
                self.scheduler.cancel(id, token);
            }
        }
        self.registry.release(id);
        trace!("unmounted {id}");
        Ok(())
    }

    /// Report the card's current rendered width. Used from the next gesture on.
    pub fn set_width(&mut self, id: CardId, width_px: f32) -> Result<()> {
        self.card_mut(id)?.set_width(width_px);
        Ok(())
    }

    // === Input ===

    /// Feed a normalized pointer event.
    pub fn pointer(&mut self, id: CardId, event: PointerEvent, now_ms: u64) -> Result<()> {
        match event.phase {
            PointerPhase::Down => self.pointer_down(id, event.x, now_ms),
            PointerPhase::Move => self.pointer_move(id, event.x, now_ms),
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave => {
                self.pointer_up(id, event.x, now_ms)
            }
        }
    }

    /// Gesture start on `id`.
    ///
    /// The exclusivity claim, including the forced close of a displaced
    /// card, completes before this card tracks any movement.
    pub fn pointer_down(&mut self, id: CardId, x: f32, now_ms: u64) -> Result<()> {
        if !self.cards.contains_key(&id) {
            return Err(SwipeError::UnknownCard(id));
        }

        if let Some(previous) = self.registry.claim(id) {
            self.force_close(previous);
        }

        let card = self.card_mut(id)?;
        let before = card.offset_px();
        let commands = card.begin_drag(x);
        let offset_px = card.offset_px();
        if offset_px != before {
            self.events.push(SwipeEvent::OffsetChanged {
                card: id,
                offset_px,
                animated: false,
            });
        }
        self.apply(id, commands, now_ms);
        trace!("{id} drag start at x={x}");
        Ok(())
    }

    /// Pointer movement on `id`. Ignored unless the card is being dragged.
    pub fn pointer_move(&mut self, id: CardId, x: f32, now_ms: u64) -> Result<()> {
        let card = self.cards.get_mut(&id).ok_or(SwipeError::UnknownCard(id))?;
        let before = card.offset_px();
        let Some(offset_px) = card.drag_to(x) else {
            return Ok(());
        };
        let zone = card.live_zone();
        let commands = card.dwell_mut().on_zone(zone, now_ms, &mut self.tokens);

        if offset_px != before {
            self.events.push(SwipeEvent::OffsetChanged {
                card: id,
                offset_px,
                animated: false,
            });
        }
        if !commands.is_empty() {
            trace!("{id} zone -> {zone}");
        }
        self.apply(id, commands, now_ms);
        Ok(())
    }

    /// Gesture end on `id`: swipe-through first, snap otherwise.
    ///
    /// `x` only feeds the release displacement; the offset is the one last
    /// reached by a move.
    pub fn pointer_up(&mut self, id: CardId, x: f32, now_ms: u64) -> Result<()> {
        let card = self.cards.get_mut(&id).ok_or(SwipeError::UnknownCard(id))?;
        let Some(release) = card.end_drag(x) else {
            return Ok(());
        };
        let offset_px = card.offset_px();
        let thresholds = *card.thresholds();
        let policy = card.config().policy;

        if let Some(zone) = swipe_through::detect(offset_px, release.velocity, &thresholds, &policy) {
            debug!("{id} swipe-through {zone} (offset={offset_px}, velocity={})", release.velocity);
            self.dispatch(id, zone, CommitSource::SwipeThrough, now_ms);
            return Ok(());
        }

        let target = snap::snap(offset_px, &thresholds, &policy);
        card.settle(target.offset_px, target.zone);
        let commands = if target.is_closed() {
            card.dwell_mut().cancel()
        } else {
            card.dwell_mut().rearm(target.zone, now_ms, &mut self.tokens)
        };

        self.events.push(SwipeEvent::OffsetChanged {
            card: id,
            offset_px: target.offset_px,
            animated: true,
        });
        self.apply(id, commands, now_ms);

        if target.is_closed() {
            self.registry.release(id);
        } else {
            debug!("{id} resting at {} ({})", target.zone, target.offset_px);
        }
        Ok(())
    }

    /// Direct activation of `zone`'s action element (tap, keyboard).
    ///
    /// Fires immediately without dwell, like a swipe-through.
    pub fn activate(&mut self, id: CardId, zone: Zone, now_ms: u64) -> Result<()> {
        if !zone.is_action() {
            return Err(SwipeError::NotAnAction(zone));
        }
        if !self.cards.contains_key(&id) {
            return Err(SwipeError::UnknownCard(id));
        }
        if let Some(previous) = self.registry.claim(id) {
            self.force_close(previous);
        }
        self.dispatch(id, zone, CommitSource::Activation, now_ms);
        Ok(())
    }

    // === Time ===

    /// A dwell timer fired.
    ///
    /// Returns `true` if it committed an action. Fires for unmounted cards
    /// or superseded tokens are stale and change nothing. The scheduler's
    /// entry for a committed token is dropped, so hosts may call this
    /// directly instead of polling.
    pub fn timer_fired(&mut self, id: CardId, token: DwellToken, now_ms: u64) -> bool {
        let Some(card) = self.cards.get_mut(&id) else {
            trace!("ignoring {token} for unmounted {id}");
            return false;
        };
        let Some(zone) = card.dwell_mut().fire(token) else {
            trace!("ignoring stale {token} for {id}");
            return false;
        };

        self.scheduler.cancel(id, token);
        self.events.push(SwipeEvent::ProgressCleared { card: id, zone });
        debug!("{id} dwell committed {zone}");
        self.dispatch(id, zone, CommitSource::Dwell, now_ms);
        true
    }

    // === Host control ===

    /// Force-close one card.
    pub fn reset(&mut self, id: CardId) -> Result<()> {
        if !self.cards.contains_key(&id) {
            return Err(SwipeError::UnknownCard(id));
        }
        self.force_close(id);
        Ok(())
    }

    /// Force-close every card.
    pub fn reset_all(&mut self) {
        let mut ids: Vec<CardId> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            self.force_close(id);
        }
        self.registry.clear();
    }

    /// A tap landed outside every tracked card: close the open one.
    ///
    /// Returns the cards that were closed.
    pub fn click_outside(&mut self) -> Vec<CardId> {
        let mut open: Vec<CardId> = self
            .cards
            .values()
            .filter(|c| c.is_open())
            .map(SwipeCard::id)
            .collect();
        open.sort_unstable();
        for &id in &open {
            self.force_close(id);
        }
        open
    }

    // === Queries ===

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&SwipeCard> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn view(&self, id: CardId, now_ms: u64) -> Option<CardView> {
        self.cards.get(&id).map(|c| c.view(now_ms))
    }

    /// Card currently holding the exclusivity claim.
    #[must_use]
    pub fn open_card(&self) -> Option<CardId> {
        self.registry.holder()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Mounted card ids in ascending order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SwipeEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    fn card_mut(&mut self, id: CardId) -> Result<&mut SwipeCard> {
        self.cards.get_mut(&id).ok_or(SwipeError::UnknownCard(id))
    }

    /// Emit the action, then reset the card unconditionally.
    fn dispatch(&mut self, id: CardId, zone: Zone, source: CommitSource, now_ms: u64) {
        debug_assert!(zone.is_action());
        self.events.push(SwipeEvent::Action {
            card: id,
            zone,
            source,
        });
        self.reset_card(id, now_ms);
    }

    /// Animated, non-dwelling close. Emits `Closed` if the card was open.
    fn force_close(&mut self, id: CardId) {
        let was_open = self.cards.get(&id).is_some_and(SwipeCard::is_open);
        self.reset_card(id, 0);
        if was_open {
            debug!("closed {id}");
            self.events.push(SwipeEvent::Closed { card: id });
        }
    }

    fn reset_card(&mut self, id: CardId, now_ms: u64) {
        let Some(card) = self.cards.get_mut(&id) else {
            self.registry.release(id);
            return;
        };
        let moved = card.offset_px() != 0.0;
        let commands = card.reset();
        if moved {
            self.events.push(SwipeEvent::OffsetChanged {
                card: id,
                offset_px: 0.0,
                animated: true,
            });
        }
        self.apply(id, commands, now_ms);
        self.registry.release(id);
    }

    /// Apply dwell commands to the scheduler and mirror them as progress events.
    fn apply(&mut self, id: CardId, commands: DwellCommands, now_ms: u64) {
        for command in commands {
            match command {
                DwellCommand::Cancel { zone, token } => {
                    trace!("{id} cancel {token} ({zone})");
                    self.scheduler.cancel(id, token);
                    self.events.push(SwipeEvent::ProgressCleared { card: id, zone });
                }
                DwellCommand::Start {
                    zone,
                    token,
                    delay_ms,
                } => {
                    trace!("{id} arm {token} for {zone}, {delay_ms}ms");
                    self.scheduler.schedule(DwellTimer {
                        card: id,
                        token,
                        armed_at_ms: now_ms,
                        delay_ms,
                    });
                    self.events.push(SwipeEvent::ProgressStarted {
                        card: id,
                        zone,
                        duration_ms: delay_ms,
                    });
                }
            }
        }
    }
}

impl<S: PollScheduler, R: OpenCardRegistry> SwipeEngine<S, R> {
    /// Fire every dwell timer due at `now_ms`. Returns the number of commits.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        let due = self.scheduler.take_due(now_ms);
        due.into_iter()
            .filter(|t| self.timer_fired(t.card, t.token, now_ms))
            .count()
    }

    /// Whether `id` has a dwell timer pending.
    #[must_use]
    pub fn has_pending_timer(&self, id: CardId) -> bool {
        self.scheduler.is_pending(id)
    }
}

impl Default for SwipeEngine<VirtualScheduler, SingleOpenRegistry> {
    fn default() -> Self {
        Self::with_virtual_clock()
    }
}
