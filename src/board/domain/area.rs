//! Physical household areas and the fixed area registry.

use super::{AreaId, BoardDomainError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference household areas carried by the default registry.
const REFERENCE_AREAS: [(&str, &str); 7] = [
    ("area-entrance", "Entrance"),
    ("area-hallway", "Hallway"),
    ("area-washroom", "Washroom"),
    ("area-toilet", "Toilet"),
    ("area-bath", "Bath"),
    ("area-living-kitchen", "Kitchen (LDK)"),
    ("area-living-other", "Living room (LDK)"),
];

/// Physical area of the household that tasks can be linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    id: AreaId,
    name: String,
}

impl Area {
    /// Creates an area with the given identifier and display name.
    #[must_use]
    pub fn new(id: AreaId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the area identifier.
    #[must_use]
    pub const fn id(&self) -> &AreaId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered, immutable collection of registered areas.
///
/// The registry is fixed at construction time; tasks reference areas by
/// identifier and tolerate identifiers that are no longer registered.
/// `AreaRegistry::default()` carries the seven reference household areas.
#[derive(Debug, Clone)]
pub struct AreaRegistry {
    areas: Vec<Area>,
    index: HashMap<AreaId, usize>,
}

impl AreaRegistry {
    /// Creates a registry from the given areas, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateArea`] when two areas share an
    /// identifier.
    pub fn new(areas: Vec<Area>) -> Result<Self, BoardDomainError> {
        let mut index = HashMap::with_capacity(areas.len());
        for (position, area) in areas.iter().enumerate() {
            if index.insert(area.id().clone(), position).is_some() {
                return Err(BoardDomainError::DuplicateArea(area.id().clone()));
            }
        }
        Ok(Self { areas, index })
    }

    /// Returns the registered areas in registry order.
    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Looks up an area by identifier.
    #[must_use]
    pub fn find(&self, id: &AreaId) -> Option<&Area> {
        self.index
            .get(id)
            .and_then(|position| self.areas.get(*position))
    }

    /// Returns whether the identifier belongs to a registered area.
    #[must_use]
    pub fn contains(&self, id: &AreaId) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of registered areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns whether the registry has no areas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl Default for AreaRegistry {
    fn default() -> Self {
        let areas: Vec<Area> = REFERENCE_AREAS
            .into_iter()
            .map(|(id, name)| Area::new(AreaId::new(id), name))
            .collect();
        let index = areas
            .iter()
            .enumerate()
            .map(|(position, area)| (area.id().clone(), position))
            .collect();
        Self { areas, index }
    }
}
