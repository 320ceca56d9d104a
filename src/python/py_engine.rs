//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardConfig, CardId, SwipeError, Zone};
use crate::engine::{CardView, SwipeEngine};
use crate::gesture::{PointerEvent, PointerPhase};

fn to_py_err(err: SwipeError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

fn parse_phase(phase: &str) -> PyResult<PointerPhase> {
    match phase {
        "down" => Ok(PointerPhase::Down),
        "move" => Ok(PointerPhase::Move),
        "up" => Ok(PointerPhase::Up),
        "cancel" => Ok(PointerPhase::Cancel),
        "leave" => Ok(PointerPhase::Leave),
        other => Err(PyErr::new::<PyValueError, _>(format!(
            "unknown pointer phase '{}'",
            other
        ))),
    }
}

/// Python wrapper for a card snapshot.
#[pyclass(name = "CardView")]
#[derive(Clone, Debug)]
pub struct PyCardView(pub CardView);

#[pymethods]
impl PyCardView {
    #[getter]
    fn card_id(&self) -> u32 {
        self.0.card.raw()
    }

    #[getter]
    fn offset_px(&self) -> f32 {
        self.0.offset_px
    }

    #[getter]
    fn animated(&self) -> bool {
        self.0.animated
    }

    #[getter]
    fn dragging(&self) -> bool {
        self.0.dragging
    }

    /// Resting stop name (`none`, `teil`, `alles`, `edit`).
    #[getter]
    fn resting(&self) -> &'static str {
        self.0.resting.wire_name()
    }

    /// Zone whose action element shows the dwell ring, if any.
    #[getter]
    fn progress_zone(&self) -> Option<&'static str> {
        self.0.progress.map(|p| p.zone.wire_name())
    }

    /// Dwell ring fill in [0, 1], if armed.
    #[getter]
    fn progress(&self) -> Option<f32> {
        self.0.progress.map(|p| p.fraction)
    }

    fn __repr__(&self) -> String {
        format!(
            "CardView(card={}, offset={}, resting={})",
            self.0.card.raw(),
            self.0.offset_px,
            self.0.resting
        )
    }
}

/// Python wrapper for the engine, using the virtual clock.
///
/// The host calls `advance(now_ms)` from its own timer or frame loop.
#[pyclass(name = "SwipeEngine")]
#[derive(Debug, Default)]
pub struct PySwipeEngine {
    inner: SwipeEngine,
}

#[pymethods]
impl PySwipeEngine {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Mount a card. Unspecified options use the defaults.
    #[pyo3(signature = (
        card_id,
        left_partial_ratio = 0.25,
        left_full_ratio = 0.5,
        right_ratio = 0.25,
        dwell_time_ms = 300,
        swipe_through_multiplier = 1.2,
    ))]
    fn mount(
        &mut self,
        card_id: u32,
        left_partial_ratio: f32,
        left_full_ratio: f32,
        right_ratio: f32,
        dwell_time_ms: u64,
        swipe_through_multiplier: f32,
    ) -> PyResult<()> {
        let config = CardConfig::default()
            .with_left_partial_ratio(left_partial_ratio)
            .with_left_full_ratio(left_full_ratio)
            .with_right_ratio(right_ratio)
            .with_dwell_time_ms(dwell_time_ms)
            .with_swipe_through_multiplier(swipe_through_multiplier);
        self.inner
            .mount(CardId::new(card_id), config)
            .map_err(to_py_err)
    }

    /// Mount a card from a TOML config string.
    fn mount_toml(&mut self, card_id: u32, toml: &str) -> PyResult<()> {
        let config = CardConfig::from_toml_str(toml)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        self.inner
            .mount(CardId::new(card_id), config)
            .map_err(to_py_err)
    }

    fn unmount(&mut self, card_id: u32) -> PyResult<()> {
        self.inner.unmount(CardId::new(card_id)).map_err(to_py_err)
    }

    fn set_width(&mut self, card_id: u32, width_px: f32) -> PyResult<()> {
        self.inner
            .set_width(CardId::new(card_id), width_px)
            .map_err(to_py_err)
    }

    /// Feed a pointer event. `phase` is one of down/move/up/cancel/leave.
    fn pointer(&mut self, card_id: u32, phase: &str, x: f32, now_ms: u64) -> PyResult<()> {
        let event = PointerEvent::new(parse_phase(phase)?, x);
        self.inner
            .pointer(CardId::new(card_id), event, now_ms)
            .map_err(to_py_err)
    }

    /// Fire due dwell timers. Returns the number of commits.
    fn advance(&mut self, now_ms: u64) -> usize {
        self.inner.advance(now_ms)
    }

    /// Tap on an action element (`teil`, `alles`, `edit`).
    fn activate(&mut self, card_id: u32, action: &str, now_ms: u64) -> PyResult<()> {
        let zone: Zone = action.parse().map_err(to_py_err)?;
        self.inner
            .activate(CardId::new(card_id), zone, now_ms)
            .map_err(to_py_err)
    }

    fn reset(&mut self, card_id: u32) -> PyResult<()> {
        self.inner.reset(CardId::new(card_id)).map_err(to_py_err)
    }

    fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    /// Close the open card after a tap outside. Returns the closed ids.
    fn click_outside(&mut self) -> Vec<u32> {
        self.inner
            .click_outside()
            .into_iter()
            .map(CardId::raw)
            .collect()
    }

    /// Committed actions since the last call as `(card_id, host_action)`,
    /// where `host_action` is `partial`, `consume_all` or `edit`.
    ///
    /// Visual events are dropped; render from `view` instead.
    fn drain_actions(&mut self) -> Vec<(u32, &'static str)> {
        self.inner
            .drain_events()
            .iter()
            .filter_map(|event| event.as_action())
            .filter_map(|(card, zone)| zone.host_action().map(|name| (card.raw(), name)))
            .collect()
    }

    fn view(&self, card_id: u32, now_ms: u64) -> Option<PyCardView> {
        self.inner.view(CardId::new(card_id), now_ms).map(PyCardView)
    }

    #[getter]
    fn open_card(&self) -> Option<u32> {
        self.inner.open_card().map(CardId::raw)
    }

    fn __repr__(&self) -> String {
        format!("SwipeEngine(cards={})", self.inner.card_count())
    }
}
