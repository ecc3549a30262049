pub mod band_scale;
pub mod bar_series;
pub mod line_series;
pub mod radar_series;
pub mod radial_scale;
pub mod scale;
pub mod types;

pub use band_scale::CategoryBandScale;
pub use bar_series::{BarColumn, BarOrientation, project_bar_columns};
pub use line_series::{CategoryPoint, LineSegment, connect_category_points, project_category_points};
pub use radar_series::{RadarVertex, project_radar_polygon};
pub use radial_scale::RadialScale;
pub use scale::LinearScale;
pub use types::{PlotArea, Viewport};
