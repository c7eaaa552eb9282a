//! Building catalog data and solver value types

use thiserror::Error;

/// Errors raised by catalog construction and the solver core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("invalid horizon {horizon}: must be non-negative")]
    InvalidHorizon { horizon: i64 },

    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },
}

/// One constructible building type
#[derive(Debug, Clone)]
pub struct BuildingType {
    pub name: String,
    /// Short display label, e.g. "T" for Theatre
    pub code: String,
    /// Time units to construct (positive)
    pub duration: i64,
    /// Earning per time unit once operational (non-negative)
    pub rate: i64,
}

impl BuildingType {
    pub fn new(name: &str, code: &str, duration: i64, rate: i64) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            duration,
            rate,
        }
    }
}

/// Validated, ordered set of building types.
///
/// Declaration order is the canonical order: the evaluator schedules
/// instances in this order and display output lists types in this order.
#[derive(Debug, Clone)]
pub struct Catalog {
    buildings: Vec<BuildingType>,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// Rejects non-positive durations, negative rates and duplicate names,
    /// so `optimize`/`evaluate` never have to re-check catalog data.
    pub fn new(buildings: Vec<BuildingType>) -> Result<Self, SolverError> {
        for b in &buildings {
            if b.duration <= 0 {
                return Err(SolverError::InvalidCatalog {
                    reason: format!("building '{}' has non-positive duration {}", b.name, b.duration),
                });
            }
            if b.rate < 0 {
                return Err(SolverError::InvalidCatalog {
                    reason: format!("building '{}' has negative rate {}", b.name, b.rate),
                });
            }
        }
        for (i, b) in buildings.iter().enumerate() {
            if buildings[..i].iter().any(|other| other.name == b.name) {
                return Err(SolverError::InvalidCatalog {
                    reason: format!("duplicate building name '{}'", b.name),
                });
            }
        }
        Ok(Self { buildings })
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn get(&self, index: usize) -> &BuildingType {
        &self.buildings[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingType> {
        self.buildings.iter()
    }
}

/// Per-type build counts for one plan, indexed by catalog position.
///
/// Every catalog slot has an explicit entry (zeros included). Two
/// combinations are equal iff all per-type counts are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    counts: Vec<u32>,
}

impl Combination {
    /// The all-zero combination for a catalog of `len` types
    pub fn empty(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// Copy with the count for one type incremented by one
    pub fn with_one_more(&self, index: usize) -> Self {
        let mut counts = self.counts.clone();
        counts[index] += 1;
        Self { counts }
    }

    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Total number of building instances in the plan
    pub fn total_instances(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theatre() -> BuildingType {
        BuildingType::new("Theatre", "T", 5, 1500)
    }

    #[test]
    fn catalog_accepts_valid_buildings() {
        let catalog = Catalog::new(vec![theatre(), BuildingType::new("Pub", "P", 4, 1000)]);
        let catalog = catalog.unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_rejects_zero_duration() {
        let err = Catalog::new(vec![BuildingType::new("Shack", "S", 0, 100)]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidCatalog { .. }));
    }

    #[test]
    fn catalog_rejects_negative_rate() {
        let err = Catalog::new(vec![BuildingType::new("Ruin", "R", 3, -1)]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidCatalog { .. }));
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let err = Catalog::new(vec![theatre(), theatre()]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidCatalog { .. }));
    }

    #[test]
    fn combination_equality_is_structural() {
        let a = Combination::empty(3).with_one_more(1);
        let b = Combination::empty(3).with_one_more(1);
        assert_eq!(a, b);
        assert_ne!(a, Combination::empty(3));
        assert_eq!(a.count(1), 1);
        assert_eq!(a.total_instances(), 1);
    }
}
