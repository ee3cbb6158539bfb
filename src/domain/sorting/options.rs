//! Named configuration choices of the sorting pipeline.
//!
//! Each enum parses from the same lowercase token it serializes to, so the
//! options can come from config files, environment variables or CLI flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SortingError;

/// How the augmented matrix is rescaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMethod {
    /// Divide each column by its maximum.
    #[default]
    Max,
    /// Min-max rescaling of each column onto [0, 1].
    Interval,
}

impl NormalizationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationMethod::Max => "max",
            NormalizationMethod::Interval => "interval",
        }
    }
}

impl FromStr for NormalizationMethod {
    type Err = SortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(NormalizationMethod::Max),
            "interval" => Ok(NormalizationMethod::Interval),
            other => Err(SortingError::unknown_option(
                "normalization method",
                other,
                "max, interval",
            )),
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which weighted rows define the ideal and anti-ideal solutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceRows {
    /// Alternative rows only.
    #[serde(rename = "alternatives")]
    Alternatives,
    /// Alternative rows and boundary profile rows.
    #[default]
    #[serde(rename = "alternatives+profiles")]
    AlternativesAndProfiles,
}

impl ReferenceRows {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceRows::Alternatives => "alternatives",
            ReferenceRows::AlternativesAndProfiles => "alternatives+profiles",
        }
    }

    /// Returns true if profile rows take part in the reference set.
    pub fn includes_profiles(&self) -> bool {
        matches!(self, ReferenceRows::AlternativesAndProfiles)
    }
}

impl FromStr for ReferenceRows {
    type Err = SortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alternatives" => Ok(ReferenceRows::Alternatives),
            "alternatives+profiles" => Ok(ReferenceRows::AlternativesAndProfiles),
            other => Err(SortingError::unknown_option(
                "reference rows",
                other,
                "alternatives, alternatives+profiles",
            )),
        }
    }
}

impl fmt::Display for ReferenceRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final class-assignment rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentMode {
    /// Adequate/Inadequate verdict per (alternative, profile) pair.
    Binary,
    /// Single class index of the profile with the closest coefficient.
    #[default]
    Nearest,
}

impl AssignmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentMode::Binary => "binary",
            AssignmentMode::Nearest => "nearest",
        }
    }
}

impl FromStr for AssignmentMode {
    type Err = SortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(AssignmentMode::Binary),
            "nearest" => Ok(AssignmentMode::Nearest),
            other => Err(SortingError::unknown_option(
                "assignment mode",
                other,
                "binary, nearest",
            )),
        }
    }
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a criterion that cannot be normalized: zero range under
/// `Interval`, or no positive maximum under `Max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateCriterionPolicy {
    /// Map every value of the column to 0 so it carries no information.
    #[default]
    Neutralize,
    /// Fail the run with `SortingError::DegenerateCriterion`.
    Reject,
}

impl FromStr for DegenerateCriterionPolicy {
    type Err = SortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutralize" => Ok(DegenerateCriterionPolicy::Neutralize),
            "reject" => Ok(DegenerateCriterionPolicy::Reject),
            other => Err(SortingError::unknown_option(
                "degenerate criterion policy",
                other,
                "neutralize, reject",
            )),
        }
    }
}

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Larger values are better.
    #[default]
    Benefit,
    /// Smaller values are better.
    Cost,
}

impl FromStr for CriterionKind {
    type Err = SortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" | "max" | "+" => Ok(CriterionKind::Benefit),
            "cost" | "min" | "-" => Ok(CriterionKind::Cost),
            other => Err(SortingError::unknown_option(
                "criterion kind",
                other,
                "benefit, cost",
            )),
        }
    }
}

/// All knobs of a single classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingOptions {
    #[serde(default)]
    pub method: NormalizationMethod,
    #[serde(default)]
    pub reference_rows: ReferenceRows,
    #[serde(default)]
    pub mode: AssignmentMode,
    #[serde(default)]
    pub degenerate_criterion: DegenerateCriterionPolicy,
    /// Per-criterion direction. Empty means every criterion is a benefit.
    #[serde(default)]
    pub criteria: Vec<CriterionKind>,
}

impl SortingOptions {
    pub fn with_method(mut self, method: NormalizationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_reference_rows(mut self, reference_rows: ReferenceRows) -> Self {
        self.reference_rows = reference_rows;
        self
    }

    pub fn with_mode(mut self, mode: AssignmentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegenerateCriterionPolicy) -> Self {
        self.degenerate_criterion = policy;
        self
    }

    pub fn with_criteria(mut self, criteria: Vec<CriterionKind>) -> Self {
        self.criteria = criteria;
        self
    }

    /// Criterion kinds expanded to `n` columns, checking the length when given.
    pub fn criteria_for(&self, n: usize) -> Result<Vec<CriterionKind>, SortingError> {
        if self.criteria.is_empty() {
            return Ok(vec![CriterionKind::Benefit; n]);
        }
        if self.criteria.len() != n {
            return Err(SortingError::dimension_mismatch(
                "criterion kinds",
                n,
                self.criteria.len(),
            ));
        }
        Ok(self.criteria.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_method_parses_known_values() {
        assert_eq!("max".parse::<NormalizationMethod>().unwrap(), NormalizationMethod::Max);
        assert_eq!(
            " Interval ".parse::<NormalizationMethod>().unwrap(),
            NormalizationMethod::Interval
        );
    }

    #[test]
    fn normalization_method_rejects_unknown_value() {
        let err = "vector".parse::<NormalizationMethod>().unwrap_err();
        assert!(matches!(err, SortingError::InvalidConfiguration(_)));
    }

    #[test]
    fn reference_rows_parse_and_display_agree() {
        for rows in [ReferenceRows::Alternatives, ReferenceRows::AlternativesAndProfiles] {
            assert_eq!(rows.to_string().parse::<ReferenceRows>().unwrap(), rows);
        }
        assert!("profiles".parse::<ReferenceRows>().is_err());
    }

    #[test]
    fn reference_rows_serde_uses_plus_token() {
        let json = serde_json::to_string(&ReferenceRows::AlternativesAndProfiles).unwrap();
        assert_eq!(json, "\"alternatives+profiles\"");
        let parsed: ReferenceRows = serde_json::from_str("\"alternatives\"").unwrap();
        assert_eq!(parsed, ReferenceRows::Alternatives);
    }

    #[test]
    fn assignment_mode_parses_known_values() {
        assert_eq!("binary".parse::<AssignmentMode>().unwrap(), AssignmentMode::Binary);
        assert_eq!("NEAREST".parse::<AssignmentMode>().unwrap(), AssignmentMode::Nearest);
        assert!("ranked".parse::<AssignmentMode>().is_err());
    }

    #[test]
    fn criterion_kind_accepts_aliases() {
        assert_eq!("cost".parse::<CriterionKind>().unwrap(), CriterionKind::Cost);
        assert_eq!("-".parse::<CriterionKind>().unwrap(), CriterionKind::Cost);
        assert_eq!("max".parse::<CriterionKind>().unwrap(), CriterionKind::Benefit);
        assert!("neutral".parse::<CriterionKind>().is_err());
    }

    #[test]
    fn degenerate_policy_parses() {
        assert_eq!(
            "reject".parse::<DegenerateCriterionPolicy>().unwrap(),
            DegenerateCriterionPolicy::Reject
        );
        assert!("ignore".parse::<DegenerateCriterionPolicy>().is_err());
    }

    #[test]
    fn default_options() {
        let options = SortingOptions::default();
        assert_eq!(options.method, NormalizationMethod::Max);
        assert_eq!(options.reference_rows, ReferenceRows::AlternativesAndProfiles);
        assert_eq!(options.mode, AssignmentMode::Nearest);
        assert_eq!(options.degenerate_criterion, DegenerateCriterionPolicy::Neutralize);
        assert!(options.criteria.is_empty());
    }

    #[test]
    fn criteria_for_defaults_to_benefit() {
        let options = SortingOptions::default();
        assert_eq!(options.criteria_for(3).unwrap(), vec![CriterionKind::Benefit; 3]);
    }

    #[test]
    fn criteria_for_checks_length() {
        let options = SortingOptions::default().with_criteria(vec![CriterionKind::Cost]);
        let err = options.criteria_for(2).unwrap_err();
        assert_eq!(err, SortingError::dimension_mismatch("criterion kinds", 2, 1));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: SortingOptions =
            serde_json::from_str(r#"{"method": "interval", "mode": "binary"}"#).unwrap();
        assert_eq!(options.method, NormalizationMethod::Interval);
        assert_eq!(options.mode, AssignmentMode::Binary);
        assert_eq!(options.reference_rows, ReferenceRows::AlternativesAndProfiles);
    }
}
