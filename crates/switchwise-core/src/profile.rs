//! The consumer's current situation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::plan::{AccidentCoverage, AgeBracket};

/// Profile of the person comparing plans. The engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age_bracket: AgeBracket,
    pub canton: String,
    pub region: String,
    /// Annual deductible in CHF.
    pub deductible: u32,
    pub accident_coverage: AccidentCoverage,
    /// Current insurer; `None` or blank means uninsured/unknown.
    #[serde(default)]
    pub current_insurer: Option<String>,
    #[serde(default)]
    pub current_plan_id: Option<String>,
}

impl UserProfile {
    /// Current insurer, if one is recognised.
    pub fn insurer(&self) -> Option<&str> {
        self.current_insurer
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Current plan identifier, if one is set.
    pub fn plan_id(&self) -> Option<&str> {
        self.current_plan_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// `(insurer, plan_id)` when both are known.
    pub fn current_plan_key(&self) -> Option<(&str, &str)> {
        Some((self.insurer()?, self.plan_id()?))
    }

    /// Whether the profile's deductible is the lowest tier for its age bracket.
    pub fn is_lowest_deductible_tier(&self) -> bool {
        self.age_bracket.is_lowest_tier(self.deductible)
    }

    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
