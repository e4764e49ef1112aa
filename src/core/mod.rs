pub mod extent;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use extent::scale_extent;
pub use scale::{LinearMapping, Scale};
pub use series::SeriesSet;
pub use ticks::{
    MAX_LABEL_DECIMALS, MAX_TICK_COUNT, TickPlan, TickValues, decimal_places, tick_plan,
    tick_precision,
};
pub use types::{PlotPoint, Viewport};
