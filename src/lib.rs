//! report-charts: deterministic chart rendering for benchmark reports.
//!
//! Charts are described once as immutable [`spec::ChartSpec`] values, projected
//! through pure geometry in [`core`], and materialized into backend-agnostic
//! [`render::RenderFrame`] primitives. The [`api`] layer resolves display
//! surfaces by identifier and silently skips charts whose surface is absent.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod reports;
pub mod spec;
pub mod telemetry;

pub use api::{RenderOutcome, ReportRenderer, SurfaceRegistry};
pub use error::{ChartError, ChartResult};
