//! ClassificationReport - Serializable result of a classification run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RunId, Timestamp};
use crate::domain::sorting::{ClassAssignment, SortingOptions};

/// Everything a caller needs to present one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    /// Where the input came from (`DecisionDataSource::describe`).
    pub source: String,
    pub options: SortingOptions,
    /// True when no profiles were supplied and the central profile was used.
    pub profiles_derived: bool,
    pub alternative_closeness: Vec<f64>,
    pub profile_closeness: Vec<f64>,
    /// One entry per alternative, in input order.
    pub assignments: Vec<ClassAssignment>,
    /// Class names, one per profile, or empty.
    pub labels: Vec<String>,
}

impl ClassificationReport {
    /// Human-readable outcome of alternative `index`.
    ///
    /// # Edge Cases
    /// - Without labels, classes print as their one-based index
    /// - Out-of-range index: `None`
    pub fn describe_assignment(&self, index: usize) -> Option<String> {
        let assignment = self.assignments.get(index)?;

        let text = match assignment {
            ClassAssignment::Class(class) => match self.labels.get(class.position()) {
                Some(label) => label.clone(),
                None => class.to_string(),
            },
            ClassAssignment::Verdicts(verdicts) => verdicts
                .iter()
                .enumerate()
                .map(|(k, verdict)| match self.labels.get(k) {
                    Some(label) => format!("{}: {}", label, verdict),
                    None => format!("P{}: {}", k + 1, verdict),
                })
                .collect::<Vec<_>>()
                .join(", "),
        };

        Some(text)
    }

    /// Plain-text table for terminals, one line per profile and alternative
    /// after the header.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("run {} at {}", self.run_id, self.computed_at),
            format!(
                "method={} reference={} mode={}",
                self.options.method, self.options.reference_rows, self.options.mode
            ),
        ];
        if self.profiles_derived {
            lines.push("profiles: central profile (column means)".to_string());
        }

        lines.extend(self.profile_closeness.iter().enumerate().map(|(k, closeness)| {
            let name = self
                .labels
                .get(k)
                .cloned()
                .unwrap_or_else(|| format!("P{}", k + 1));
            format!("profile {:<12} {:.4}", name, closeness)
        }));

        lines.extend(self.alternative_closeness.iter().enumerate().map(|(i, closeness)| {
            let outcome = self.describe_assignment(i).unwrap_or_default();
            format!("A{:<4} {:.4}  {}", i + 1, closeness, outcome)
        }));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClassIndex;
    use crate::domain::sorting::Verdict;

    fn report(assignments: Vec<ClassAssignment>, labels: Vec<&str>) -> ClassificationReport {
        ClassificationReport {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            source: "memory".to_string(),
            options: SortingOptions::default(),
            profiles_derived: false,
            alternative_closeness: vec![0.9; assignments.len()],
            profile_closeness: vec![0.8, 0.2],
            assignments,
            labels: labels.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn class_uses_label_when_present() {
        let r = report(
            vec![ClassAssignment::Class(ClassIndex::from_position(1))],
            vec!["Good", "Bad"],
        );
        assert_eq!(r.describe_assignment(0).as_deref(), Some("Bad"));
    }

    #[test]
    fn class_falls_back_to_index() {
        let r = report(vec![ClassAssignment::Class(ClassIndex::from_position(1))], vec![]);
        assert_eq!(r.describe_assignment(0).as_deref(), Some("2"));
    }

    #[test]
    fn verdicts_are_paired_with_profiles() {
        let r = report(
            vec![ClassAssignment::Verdicts(vec![
                Verdict::Inadequate,
                Verdict::Adequate,
            ])],
            vec![],
        );
        assert_eq!(
            r.describe_assignment(0).as_deref(),
            Some("P1: Inadequate, P2: Adequate")
        );
        assert_eq!(r.describe_assignment(5), None);
    }

    #[test]
    fn text_lists_every_alternative() {
        let r = report(
            vec![
                ClassAssignment::Class(ClassIndex::from_position(0)),
                ClassAssignment::Class(ClassIndex::from_position(1)),
            ],
            vec!["Good", "Bad"],
        );
        let text = r.to_text();
        assert!(text.contains("A1"));
        assert!(text.contains("A2"));
        assert!(text.contains("profile Good"));
    }

    #[test]
    fn text_has_one_line_per_profile_and_alternative() {
        let mut r = report(
            vec![
                ClassAssignment::Class(ClassIndex::from_position(0)),
                ClassAssignment::Class(ClassIndex::from_position(1)),
                ClassAssignment::Class(ClassIndex::from_position(1)),
            ],
            vec![],
        );
        let text = r.to_text();
        assert_eq!(text.lines().count(), 2 + 2 + 3);
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().nth(2), Some("profile P1           0.8000"));
        assert_eq!(text.lines().last(), Some("A3    0.9000  2"));

        r.profiles_derived = true;
        assert_eq!(r.to_text().lines().count(), 3 + 2 + 3);
    }

    #[test]
    fn report_round_trips_through_yaml() {
        let r = report(
            vec![ClassAssignment::Class(ClassIndex::from_position(0))],
            vec!["Good", "Bad"],
        );
        let yaml = serde_yaml::to_string(&r).unwrap();
        let back: ClassificationReport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.assignments, r.assignments);
        assert_eq!(back.labels, r.labels);
        assert_eq!(back.run_id, r.run_id);
    }
}
