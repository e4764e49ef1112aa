//! chart-scale: scale engine and headless layout pass for a line chart.
//!
//! `core` holds the numeric scale engine (domain normalization, forward and
//! inverse mapping, round-number tick plans, label precision). `api` consumes
//! it once per layout pass to place points, gridlines and labels and to map
//! pointer positions back to data indices. `render` is the boundary to a
//! drawing backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartLayout, ChartLayoutConfig};
pub use crate::core::{Scale, TickPlan};
pub use error::{ChartError, ChartResult};
