//! End-to-end report builds against an in-memory portal

mod common;

use igvf_metadata::api::{Identifier, MemorySource, RemoteError};
use igvf_metadata::config::FieldCatalog;
use igvf_metadata::graph::Cell;
use igvf_metadata::input::ReportInput;
use igvf_metadata::report::{Report, ReportDriver, ReportOutcome};
use igvf_metadata::table::Highlight;
use serde_json::json;
use std::collections::HashSet;

use common::*;

async fn build(source: &MemorySource, input: &ReportInput) -> Report {
    let catalog = FieldCatalog::builtin().unwrap();
    match ReportDriver::new(source, &catalog).run(input).await.unwrap() {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoInput => panic!("expected a report"),
    }
}

fn accession_input() -> ReportInput {
    ReportInput::accession(ACCESSION).unwrap()
}

#[tokio::test]
async fn test_accession_report_has_sorted_sheets() {
    let source = portal();
    let report = build(&source, &accession_input()).await;

    assert_eq!(report.file_name(), "IGVFDS0000AAAA_metadata.xlsx");
    let names: Vec<&str> = report.sheets.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "analysis_set.files",
            "analysis_set.samples",
            "input_file_sets",
            "input_file_sets.samples"
        ]
    );
}

#[tokio::test]
async fn test_samples_sheet_colors_status_and_drops_clean_audits() {
    let source = portal();
    let report = build(&source, &accession_input()).await;
    let sheet = report.sheet("analysis_set.samples").unwrap();

    assert_eq!(sheet.rows(), 2);
    let status = sheet.column("analysis_set.samples.status").unwrap();
    assert_eq!(status.cells[0].value, Cell::Value(json!("released")));
    assert_eq!(status.cells[0].highlight, Some(Highlight::Positive));
    assert_eq!(status.cells[1].value, Cell::Value(json!("in progress")));
    assert_eq!(status.cells[1].highlight, Some(Highlight::Pending));

    assert!(sheet.column("analysis_set.samples.audit").is_none());
    assert!(sheet.column("analysis_set.samples.donors.audit").is_none());
    assert_eq!(
        sheet.column("analysis_set.samples.donors.summary").unwrap().cells[0].value,
        Cell::Value(json!("Homo sapiens adult male"))
    );
}

#[tokio::test]
async fn test_input_file_sets_sheet_is_row_aligned() {
    let source = portal();
    let report = build(&source, &accession_input()).await;
    let sheet = report.sheet("input_file_sets").unwrap();

    assert_eq!(sheet.rows(), 2);
    for column in sheet.columns() {
        assert_eq!(column.cells.len(), 2, "column {}", column.name);
    }

    // Link table comes before the projection that repeats its @id column
    assert_eq!(
        sheet.column("input_file_set.samples.@id").unwrap().cells[0].value,
        Cell::Value(json!(format!("{}, {}", SAMPLE_1, SAMPLE_2)))
    );

    let sample_status = sheet.column("input_file_set.samples.status").unwrap();
    assert_eq!(
        sample_status.cells[0].value,
        Cell::Many(vec![Cell::Value(json!("released")), Cell::Value(json!("in progress"))])
    );
    assert_eq!(sample_status.cells[0].highlight, Some(Highlight::Neutral));
    assert_eq!(sample_status.cells[1].highlight, Some(Highlight::Pending));

    let donors = sheet.column("input_file_set.donors.@id").unwrap();
    assert_eq!(donors.cells[1].value, Cell::Null);

    let audit = sheet.column("input_file_set.audit").unwrap();
    assert_eq!(audit.cells[0].value, Cell::Null);
    assert!(!audit.cells[1].value.is_null());

    assert_eq!(
        sheet.column("input_file_set.assay_term.term_name").unwrap().cells[1].value,
        Cell::Value(json!("whole genome sequencing"))
    );
    assert!(sheet.column("input_file_set.documents.@id").is_none());

    let names = sheet.column_names();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
}

#[tokio::test]
async fn test_files_sheet_follows_derived_from() {
    let source = portal();
    let report = build(&source, &accession_input()).await;
    let sheet = report.sheet("analysis_set.files").unwrap();

    assert_eq!(sheet.rows(), 1);
    assert_eq!(
        sheet.column("analysis_set.files.file_size").unwrap().cells[0].value,
        Cell::Value(json!(1024))
    );
    assert_eq!(
        sheet.column("analysis_set.files.derived_from.@id").unwrap().cells[0].value,
        Cell::Value(json!(RAW_FILE))
    );
    assert_eq!(
        sheet.column("analysis_set.files.derived_from.file_format").unwrap().cells[0].value,
        Cell::Value(json!("fastq"))
    );
}

#[tokio::test]
async fn test_each_object_is_fetched_once_per_run() {
    let source = portal();
    build(&source, &accession_input()).await;

    let requests = source.requests();
    let unique: HashSet<&Identifier> = requests.iter().collect();
    assert_eq!(unique.len(), requests.len());
    assert_eq!(requests[0], Identifier::from(ANALYSIS_SET));
}

#[tokio::test]
async fn test_path_list_skips_invalid_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sets.txt");
    std::fs::write(
        &path,
        format!("/samples/IGVFSM9999ZZZZ/\n\n{}\n", MEASUREMENT_SET_2),
    )
    .unwrap();

    let input = ReportInput::from_file(&path).unwrap();
    let source = portal();
    let report = build(&source, &input).await;

    assert_eq!(report.file_name(), "sets_metadata.xlsx");
    assert_eq!(report.sheet("file_sets").unwrap().rows(), 1);

    let requests = source.requests();
    assert_eq!(requests[0], Identifier::from(MEASUREMENT_SET_2));
    assert!(!requests.contains(&Identifier::from("/samples/IGVFSM9999ZZZZ/")));
}

#[tokio::test]
async fn test_analysis_set_without_inputs_reports_no_input() {
    let source = MemorySource::new().with(json!({
        "@id": "/analysis-sets/IGVFDS9999EMPT/",
        "status": "in progress",
        "input_file_sets": []
    }));
    let catalog = FieldCatalog::builtin().unwrap();
    let input = ReportInput::accession("IGVFDS9999EMPT").unwrap();

    let outcome = ReportDriver::new(&source, &catalog).run(&input).await.unwrap();
    assert_eq!(outcome, ReportOutcome::NoInput);
}

#[tokio::test]
async fn test_missing_linked_object_aborts_the_run() {
    let source = MemorySource::new()
        .with(json!({
            "@id": ANALYSIS_SET,
            "input_file_sets": [{"@id": MEASUREMENT_SET_1}]
        }))
        .with(json!({
            "@id": MEASUREMENT_SET_1,
            "status": "released",
            "donors": [DONOR]
        }));
    let catalog = FieldCatalog::builtin().unwrap();

    let error = ReportDriver::new(&source, &catalog)
        .run(&accession_input())
        .await
        .unwrap_err();
    let message = format!("{:#}", error);
    assert!(message.contains(DONOR), "unexpected error: {}", message);
    assert!(message.contains("404"), "unexpected error: {}", message);

    let remote = RemoteError::find(&error).unwrap();
    assert_eq!(remote.path(), &Identifier::from(DONOR));
}

#[tokio::test]
async fn test_zero_hops_drops_linked_sheets_but_keeps_analysis_set_fields() {
    let source = portal();
    let catalog = FieldCatalog::builtin().unwrap().with_max_hops(0);

    let ReportOutcome::Ready(report) = ReportDriver::new(&source, &catalog)
        .run(&accession_input())
        .await
        .unwrap()
    else {
        panic!("expected a report");
    };

    assert!(report.sheet("input_file_sets.samples").is_none());
    assert!(report.sheet("input_file_sets").unwrap().column("input_file_set.samples.@id").is_none());
    assert!(report.sheet("analysis_set.samples").unwrap().column("analysis_set.samples.status").is_some());
}
