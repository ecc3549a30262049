pub mod chart;
pub mod format;
pub mod series;
pub mod theme;

pub use chart::{ChartKind, ChartSpec, LegendPosition, ValueAxis};
pub use format::{TickFormat, TooltipFormat};
pub use series::{ResultSeries, SeriesPaint, SeriesStyle};
pub use theme::ChartTheme;
