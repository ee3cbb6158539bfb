//! CSV files through the data source, handler and report.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use topsis_sort_c::adapters::CsvDataSource;
use topsis_sort_c::application::{ClassifyCommand, ClassifyError, ClassifyHandler};
use topsis_sort_c::domain::sorting::{AssignmentMode, Verdict};
use topsis_sort_c::ports::DataSourceError;
use topsis_sort_c::SortingOptions;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn labeled_profiles_from_csv() {
    let dir = TempDir::new().unwrap();
    let source = CsvDataSource::new(
        write(&dir, "matrix.csv", "9,9,9\n5,6,4\n1,2,1\n"),
        write(&dir, "weights.csv", "9\n8\n8\n"),
    )
    .with_profiles(write(&dir, "profiles.csv", "8,8,8\n5,5,5\n2,2,2\n"))
    .with_labels(write(&dir, "labels.csv", "Good,Medium,Bad\n"));

    let report = ClassifyHandler::new(Arc::new(source))
        .handle(ClassifyCommand::default())
        .await
        .unwrap();

    let described: Vec<String> = (0..3)
        .map(|i| report.describe_assignment(i).unwrap())
        .collect();
    assert_eq!(described, vec!["Good", "Medium", "Bad"]);
    assert!(report.source.starts_with("csv:"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["assignments"][0]["class"], 1);
    assert_eq!(json["options"]["method"], "max");
}

#[tokio::test]
async fn binary_scenario_from_csv() {
    let dir = TempDir::new().unwrap();
    let source = CsvDataSource::new(
        write(&dir, "matrix.csv", "5, 2, 10\n3, 8, 5\n\n9, 4, 1\n"),
        write(&dir, "weights.csv", "0.3, 0.5, 0.2\n"),
    )
    .with_profiles(write(&dir, "profiles.csv", "7,5,3\n"));

    let report = ClassifyHandler::new(Arc::new(source))
        .handle(ClassifyCommand::new(
            SortingOptions::default().with_mode(AssignmentMode::Binary),
        ))
        .await
        .unwrap();

    let verdicts: Vec<Verdict> = report
        .assignments
        .iter()
        .map(|a| a.verdicts().unwrap()[0])
        .collect();
    assert_eq!(
        verdicts,
        vec![Verdict::Inadequate, Verdict::Adequate, Verdict::Inadequate]
    );
    assert!(report.to_text().contains("Adequate"));
}

#[tokio::test]
async fn bad_cell_surfaces_as_source_error() {
    let dir = TempDir::new().unwrap();
    let source = CsvDataSource::new(
        write(&dir, "matrix.csv", "1,2\n3,four\n"),
        write(&dir, "weights.csv", "1,1\n"),
    );

    let err = ClassifyHandler::new(Arc::new(source))
        .handle(ClassifyCommand::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClassifyError::Source(DataSourceError::Parse {
            line: 2,
            column: 2,
            ..
        })
    ));
}
