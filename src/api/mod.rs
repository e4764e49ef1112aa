mod chart_layout;
mod engine;
mod input_mapper;
mod label_format;
mod layout_config;

pub use chart_layout::{AxisTick, AxisTicks, ChartLayout, PlotArea};
pub use engine::ChartEngine;
pub use input_mapper::InputMapper;
pub use label_format::format_axis_label;
pub use layout_config::{ChartLayoutConfig, ChartStyle, PlotInsets};
