//! Python bindings for the titan-ricochet engine.
//!
//! # Quick Start
//!
//! ```python
//! import titan_ricochet as tr
//!
//! game = tr.Game(seed=7)
//! cannon = game.cells_of("cannon")[0]
//! game.select_piece(cannon)
//! game.choose_destination(game.highlights()[0])
//! outcome = game.resolve_shot()
//! board = game.cells()  # 64 entries, None or (kind, owner, degrees)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// titan_ricochet: rules engine for a two-player ricochet cannon game.
#[pymodule]
fn titan_ricochet(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
