//! ClassifyHandler - Loads decision data and runs TOPSIS-Sort-C.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::ClassificationReport;
use crate::domain::foundation::{DomainError, RunId, Timestamp};
use crate::domain::sorting::{MatrixAssembler, SortingError, SortingOptions, TopsisSortC};
use crate::ports::{DataSourceError, DecisionDataSource};

/// Command to classify the alternatives of the configured data source.
#[derive(Debug, Clone, Default)]
pub struct ClassifyCommand {
    /// Options for this run. Criterion kinds loaded from the source take
    /// precedence over `options.criteria` when present.
    pub options: SortingOptions,
}

impl ClassifyCommand {
    pub fn new(options: SortingOptions) -> Self {
        Self { options }
    }
}

/// Error type for classification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("Failed to load decision data: {0}")]
    Source(#[from] DataSourceError),

    #[error(transparent)]
    Sorting(#[from] SortingError),
}

impl From<ClassifyError> for DomainError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::Source(e) => e.into(),
            ClassifyError::Sorting(e) => e.into(),
        }
    }
}

/// Handler for classification runs.
pub struct ClassifyHandler {
    source: Arc<dyn DecisionDataSource>,
}

impl ClassifyHandler {
    pub fn new(source: Arc<dyn DecisionDataSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, cmd: ClassifyCommand) -> Result<ClassificationReport, ClassifyError> {
        let run_id = RunId::new();
        let source = self.source.describe();

        // 1. Load input through the port
        let input = self.source.load().await?;
        debug!(
            run_id = %run_id,
            source = %source,
            alternatives = input.decision.row_count(),
            criteria = input.decision.column_count(),
            "Decision data loaded"
        );

        // 2. Fall back to the central profile
        let profiles_derived = input.profiles.is_none();
        let profiles = match input.profiles {
            Some(profiles) => profiles,
            None => MatrixAssembler::central_profile(&input.decision)?,
        };

        if !input.labels.is_empty() && input.labels.len() != profiles.row_count() {
            return Err(SortingError::dimension_mismatch(
                "profile labels",
                profiles.row_count(),
                input.labels.len(),
            )
            .into());
        }

        let mut options = cmd.options;
        if !input.criteria.is_empty() {
            options.criteria = input.criteria;
        }

        // 3. Run the pipeline
        let outcome =
            TopsisSortC::new(options.clone()).run(&input.decision, &profiles, &input.weights)?;

        info!(
            run_id = %run_id,
            alternatives = outcome.assignments.len(),
            profiles = outcome.closeness.profiles.len(),
            method = %options.method,
            mode = %options.mode,
            profiles_derived,
            "Classification complete"
        );

        Ok(ClassificationReport {
            run_id,
            computed_at: Timestamp::now(),
            source,
            options,
            profiles_derived,
            alternative_closeness: outcome.closeness.alternatives,
            profile_closeness: outcome.closeness.profiles,
            assignments: outcome.assignments,
            labels: input.labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryDataSource;
    use crate::domain::foundation::{ErrorCode, Matrix};
    use crate::domain::sorting::{AssignmentMode, CriterionKind, Verdict, Weights};
    use crate::ports::DecisionInput;

    fn scenario_two() -> DecisionInput {
        DecisionInput::new(
            Matrix::from_rows(vec![
                vec![9.0, 9.0, 9.0],
                vec![5.0, 6.0, 4.0],
                vec![1.0, 2.0, 1.0],
            ])
            .unwrap(),
            Matrix::from_rows(vec![
                vec![8.0, 8.0, 8.0],
                vec![5.0, 5.0, 5.0],
                vec![2.0, 2.0, 2.0],
            ])
            .unwrap(),
            Weights::new(vec![9.0, 8.0, 8.0]),
        )
        .with_labels(vec!["Good", "Medium", "Bad"])
    }

    fn handler(input: DecisionInput) -> ClassifyHandler {
        ClassifyHandler::new(Arc::new(InMemoryDataSource::new(input)))
    }

    #[tokio::test]
    async fn classifies_into_labeled_classes() {
        let report = handler(scenario_two())
            .handle(ClassifyCommand::default())
            .await
            .unwrap();

        let classes: Vec<usize> = report
            .assignments
            .iter()
            .filter_map(|a| a.class_index())
            .map(|c| c.value())
            .collect();
        assert_eq!(classes, vec![1, 2, 3]);
        assert_eq!(report.describe_assignment(1).as_deref(), Some("Medium"));
        assert_eq!(report.source, "memory");
        assert!(!report.profiles_derived);
    }

    #[tokio::test]
    async fn derives_central_profile_when_missing() {
        let mut input = scenario_two();
        input.profiles = None;
        input.labels.clear();

        let report = handler(input)
            .handle(ClassifyCommand::new(
                SortingOptions::default().with_mode(AssignmentMode::Binary),
            ))
            .await
            .unwrap();

        assert!(report.profiles_derived);
        assert_eq!(report.profile_closeness.len(), 1);
        let verdicts: Vec<Verdict> = report
            .assignments
            .iter()
            .map(|a| a.verdicts().unwrap()[0])
            .collect();
        assert_eq!(
            verdicts,
            vec![Verdict::Adequate, Verdict::Inadequate, Verdict::Inadequate]
        );
    }

    #[tokio::test]
    async fn rejects_label_count_mismatch() {
        let input = scenario_two().with_labels(vec!["Good", "Bad"]);

        let err = handler(input)
            .handle(ClassifyCommand::default())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClassifyError::Sorting(SortingError::dimension_mismatch("profile labels", 3, 2))
        );
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::DimensionMismatch);
    }

    #[tokio::test]
    async fn source_criteria_override_command_criteria() {
        let input = scenario_two().with_criteria(vec![CriterionKind::Cost; 3]);

        let report = handler(input)
            .handle(ClassifyCommand::new(
                SortingOptions::default().with_criteria(vec![CriterionKind::Benefit; 3]),
            ))
            .await
            .unwrap();

        assert_eq!(report.options.criteria, vec![CriterionKind::Cost; 3]);
        // the worst row under cost criteria coincides with the anti-ideal
        assert!(report.alternative_closeness[0].abs() < 1e-12);
        assert!(report.profile_closeness[0] < report.profile_closeness[2]);
    }

    #[tokio::test]
    async fn sorting_errors_propagate() {
        let mut input = scenario_two();
        input.weights = Weights::new(vec![1.0, 1.0]);

        let err = handler(input)
            .handle(ClassifyCommand::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClassifyError::Sorting(SortingError::DimensionMismatch { .. })
        ));
    }
}
