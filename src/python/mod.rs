//! Python bindings for the swipe engine.
//!
//! Lets a Python UI host (server-rendered pages that relay pointer events)
//! run the gesture engine natively.
//!
//! # Quick Start
//!
//! ```python
//! import rust_swipe as swipe
//!
//! engine = swipe.SwipeEngine()
//! engine.mount(1, dwell_time_ms=300)
//! engine.set_width(1, 300.0)
//!
//! engine.pointer(1, "down", 300.0, 0)
//! engine.pointer(1, "move", 140.0, 16)
//! engine.advance(316)
//!
//! for card_id, action in engine.drain_actions():
//!     print(card_id, action)  # 1 consume_all
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// rust_swipe: swipe-card gesture engine.
#[pymodule]
fn rust_swipe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySwipeEngine>()?;
    m.add_class::<PyCardView>()?;
    Ok(())
}
