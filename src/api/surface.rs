use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Display surfaces available to a report, keyed by identifier.
///
/// Mirrors a host page where each chart targets one container looked up by id.
/// Only a subset of charts may have a surface on any given page, so lookups
/// returning `None` are an expected outcome, not a failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceRegistry {
    surfaces: IndexMap<String, Viewport>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface, replacing any previous entry under the same id.
    pub fn insert(&mut self, id: impl Into<String>, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let id = id.into();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "surface id must not be empty".to_owned(),
            ));
        }
        self.surfaces.insert(id, viewport);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Viewport> {
        self.surfaces.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Surface ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}
