//! Calendar module
//!
//! Month-grid generation and event bucketing for the lab calendar.

pub mod grid;
pub mod holidays;

pub use grid::{events_on, DayCell, MonthGrid, GRID_CELLS};
