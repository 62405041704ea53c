//! Raw catalog rows and their validation into [`PlanOffer`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{AccidentCoverage, AgeBracket, PlanCategory, PlanOffer};
use crate::error::ValidationError;

/// A row as delivered by the pricing catalog.
///
/// Codes are kept as strings and the premium as an untyped JSON value so a
/// malformed row survives decoding and can be rejected with a field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferRow {
    /// Tariff code, e.g. `TAR-BASE`.
    #[serde(default)]
    pub category: Option<String>,
    pub insurer_name: String,
    pub plan_id: String,
    #[serde(default)]
    pub plan_label: String,
    pub monthly_premium: serde_json::Value,
    pub age_bracket: String,
    pub deductible: u32,
    pub accident_coverage: String,
}

fn parse_premium(value: &serde_json::Value) -> Result<Decimal, ValidationError> {
    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        other => {
            return Err(ValidationError::invalid(
                "monthly_premium",
                format!("expected a number, got {other}"),
            ))
        }
    };

    let premium = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| {
            ValidationError::invalid("monthly_premium", format!("'{text}' is not numeric"))
        })?;

    if premium.is_sign_negative() && !premium.is_zero() {
        return Err(ValidationError::invalid(
            "monthly_premium",
            format!("{premium} is negative"),
        ));
    }
    Ok(premium)
}

fn non_blank(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::invalid(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl TryFrom<OfferRow> for PlanOffer {
    type Error = ValidationError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        let monthly_premium = parse_premium(&row.monthly_premium)?;
        let insurer_name = non_blank("insurer_name", row.insurer_name)?;
        let plan_id = non_blank("plan_id", row.plan_id)?;
        let age_bracket =
            AgeBracket::from_code(&row.age_bracket).ok_or_else(|| ValidationError::UnknownCode {
                field: "age_bracket".into(),
                code: row.age_bracket.clone(),
            })?;
        let accident_coverage = AccidentCoverage::from_code(&row.accident_coverage)
            .ok_or_else(|| ValidationError::UnknownCode {
                field: "accident_coverage".into(),
                code: row.accident_coverage.clone(),
            })?;
        let plan_label = if row.plan_label.trim().is_empty() {
            plan_id.clone()
        } else {
            row.plan_label
        };

        Ok(PlanOffer {
            category: PlanCategory::from_code(row.category.as_deref()),
            insurer_name,
            plan_id,
            plan_label,
            monthly_premium,
            age_bracket,
            deductible: row.deductible,
            accident_coverage,
        })
    }
}

/// Validate a whole snapshot, failing on the first bad row.
pub fn validate_rows(rows: Vec<OfferRow>) -> Result<Vec<PlanOffer>, ValidationError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            PlanOffer::try_from(row).map_err(|source| {
                tracing::warn!(index, field = source.field(), "rejecting offer row: {source}");
                ValidationError::InvalidRow {
                    index,
                    source: Box::new(source),
                }
            })
        })
        .collect()
}
