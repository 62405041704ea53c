//! Boundary to the pricing catalog.
//!
//! The engine never queries anything itself; callers obtain a complete
//! offer snapshot through an [`OfferSource`] and hand it over.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};
use crate::plan::{validate_rows, AccidentCoverage, AgeBracket, OfferRow, PlanOffer};
use crate::profile::UserProfile;

/// Query parameters for the catalog, derived from a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferFilter {
    pub canton: String,
    pub region: String,
    pub age_bracket: AgeBracket,
    pub deductible: u32,
    pub accident_coverage: AccidentCoverage,
}

impl OfferFilter {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            canton: profile.canton.clone(),
            region: profile.region.clone(),
            age_bracket: profile.age_bracket,
            deductible: profile.deductible,
            accident_coverage: profile.accident_coverage,
        }
    }

    /// Whether `offer` matches the per-row fields of this filter.
    ///
    /// Canton and region select the snapshot, not individual rows.
    pub fn matches(&self, offer: &PlanOffer) -> bool {
        offer.age_bracket == self.age_bracket
            && offer.deductible == self.deductible
            && offer.accident_coverage == self.accident_coverage
    }
}

/// Something that can deliver a consistent offer snapshot.
pub trait OfferSource {
    fn fetch(&self, filter: &OfferFilter) -> Result<Vec<PlanOffer>>;
}

/// In-memory snapshot of validated offers for one canton and region.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    offers: Vec<PlanOffer>,
}

impl SnapshotSource {
    pub fn new(offers: Vec<PlanOffer>) -> Self {
        Self { offers }
    }

    /// Validate raw catalog rows into a snapshot.
    pub fn from_rows(rows: Vec<OfferRow>) -> Result<Self> {
        Ok(Self::new(validate_rows(rows)?))
    }

    /// Load a JSON array of [`OfferRow`] from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot_error = |message: String| CoreError::Snapshot {
            path: PathBuf::from(path),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| snapshot_error(e.to_string()))?;
        let rows: Vec<OfferRow> =
            serde_json::from_str(&content).map_err(|e| snapshot_error(e.to_string()))?;
        tracing::debug!(rows = rows.len(), path = %path.display(), "loaded offer snapshot");
        Self::from_rows(rows)
    }

    pub fn offers(&self) -> &[PlanOffer] {
        &self.offers
    }
}

impl OfferSource for SnapshotSource {
    fn fetch(&self, filter: &OfferFilter) -> Result<Vec<PlanOffer>> {
        Ok(self
            .offers
            .iter()
            .filter(|offer| filter.matches(offer))
            .cloned()
            .collect())
    }
}
