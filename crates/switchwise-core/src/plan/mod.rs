//! Plan offers and the closed vocabularies they are described with.
//!
//! Offers are produced by the external pricing catalog. The catalog speaks
//! in short codes (`TAR-BASE`, `AKL-ERW`, `MIT-UNF`, ...); this module maps
//! them onto closed enumerations so nothing downstream dispatches on strings.

pub mod row;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use row::{validate_rows, OfferRow};

/// Coverage model of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanCategory {
    /// Unrestricted choice of provider.
    Standard,
    /// Family-doctor gatekept.
    FamilyDoctor,
    /// HMO gatekept.
    Hmo,
    /// Any other model, including unrecognised catalog codes.
    Other,
}

impl PlanCategory {
    /// Fixed search and grouping order.
    pub const ALL: [PlanCategory; 4] = [
        PlanCategory::Standard,
        PlanCategory::FamilyDoctor,
        PlanCategory::Hmo,
        PlanCategory::Other,
    ];

    /// Map a catalog tariff code. Unknown or missing codes are `Other`.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("TAR-BASE") => PlanCategory::Standard,
            Some("TAR-HAM") => PlanCategory::FamilyDoctor,
            Some("TAR-HMO") => PlanCategory::Hmo,
            _ => PlanCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanCategory::Standard => "Standard",
            PlanCategory::FamilyDoctor => "Family doctor",
            PlanCategory::Hmo => "HMO",
            PlanCategory::Other => "Other",
        }
    }

    /// Index into fixed-order tables.
    pub(crate) fn index(&self) -> usize {
        match self {
            PlanCategory::Standard => 0,
            PlanCategory::FamilyDoctor => 1,
            PlanCategory::Hmo => 2,
            PlanCategory::Other => 3,
        }
    }
}

impl std::fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Age bracket used by the catalog for premium tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// Ages 0-18.
    #[serde(alias = "AKL-KIN")]
    Child,
    /// Ages 19-25.
    #[serde(alias = "AKL-JUG")]
    YoungAdult,
    /// Ages 26 and over.
    #[serde(alias = "AKL-ERW")]
    Adult,
}

impl AgeBracket {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "AKL-KIN" | "child" => Some(AgeBracket::Child),
            "AKL-JUG" | "young_adult" => Some(AgeBracket::YoungAdult),
            "AKL-ERW" | "adult" => Some(AgeBracket::Adult),
            _ => None,
        }
    }

    /// Lowest deductible tier available to this bracket, in CHF.
    pub fn minimum_deductible(&self) -> u32 {
        match self {
            AgeBracket::Child => 0,
            AgeBracket::YoungAdult | AgeBracket::Adult => 300,
        }
    }

    /// Whether `deductible` is the lowest tier for this bracket.
    pub fn is_lowest_tier(&self, deductible: u32) -> bool {
        deductible == self.minimum_deductible()
    }
}

/// Whether accident coverage is part of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentCoverage {
    #[serde(alias = "MIT-UNF")]
    Included,
    #[serde(alias = "OHN-UNF")]
    Excluded,
}

impl AccidentCoverage {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "MIT-UNF" | "included" => Some(AccidentCoverage::Included),
            "OHN-UNF" | "excluded" => Some(AccidentCoverage::Excluded),
            _ => None,
        }
    }
}

/// One quoted plan/price combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOffer {
    pub category: PlanCategory,
    pub insurer_name: String,
    pub plan_id: String,
    pub plan_label: String,
    /// Monthly premium in CHF, unrounded.
    pub monthly_premium: Decimal,
    pub age_bracket: AgeBracket,
    /// Annual deductible in CHF.
    pub deductible: u32,
    pub accident_coverage: AccidentCoverage,
}

impl PlanOffer {
    /// Whether this offer is the plan identified by `(insurer, plan_id)`.
    pub fn is_plan(&self, insurer: &str, plan_id: &str) -> bool {
        self.insurer_name == insurer && self.plan_id == plan_id
    }

    /// Structural identity used by the engine.
    pub fn same_plan(&self, other: &PlanOffer) -> bool {
        self.is_plan(&other.insurer_name, &other.plan_id)
    }
}
