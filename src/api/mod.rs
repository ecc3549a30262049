mod engine;
mod surface;

pub use engine::{RenderOutcome, ReportRenderer};
pub use surface::SurfaceRegistry;
