//! Sorting defaults

use serde::Deserialize;

use crate::domain::sorting::{
    AssignmentMode, DegenerateCriterionPolicy, NormalizationMethod, ReferenceRows,
    SortingOptions,
};

/// Default options for classification runs
///
/// Every field falls back to the domain default, so an empty environment
/// yields `SortingOptions::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SortingConfig {
    /// `max` or `interval`
    #[serde(default)]
    pub method: NormalizationMethod,

    /// `alternatives` or `alternatives+profiles`
    #[serde(default)]
    pub reference_rows: ReferenceRows,

    /// `binary` or `nearest`
    #[serde(default)]
    pub mode: AssignmentMode,

    /// `neutralize` or `reject`
    #[serde(default)]
    pub degenerate_criterion: DegenerateCriterionPolicy,
}

impl SortingConfig {
    /// Domain options with every criterion treated as a benefit.
    pub fn to_options(&self) -> SortingOptions {
        SortingOptions::default()
            .with_method(self.method)
            .with_reference_rows(self.reference_rows)
            .with_mode(self.mode)
            .with_degenerate_policy(self.degenerate_criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_domain_defaults() {
        assert_eq!(SortingConfig::default().to_options(), SortingOptions::default());
    }

    #[test]
    fn deserializes_option_names() {
        let yaml = "method: interval\nreference_rows: alternatives\nmode: binary\ndegenerate_criterion: reject\n";
        let config: SortingConfig = serde_yaml::from_str(yaml).unwrap();

        let options = config.to_options();
        assert_eq!(options.method, NormalizationMethod::Interval);
        assert_eq!(options.reference_rows, ReferenceRows::Alternatives);
        assert_eq!(options.mode, AssignmentMode::Binary);
        assert_eq!(
            options.degenerate_criterion,
            DegenerateCriterionPolicy::Reject
        );
        assert!(options.criteria.is_empty());
    }
}
