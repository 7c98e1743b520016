//! End-to-end tests over the embedded client table

use chrono::NaiveDate;
use compliance_dashboard::{
    aggregate, classify, export, load, load_from_reader, load_screening, views, AppState,
    ComplianceStatus, Config, DashboardError, OrgStructure,
};

const HEADER: &str = "Client Name,Date of initial contract signing,Date of final credit assessment completed,Subsidiary or a standalone,External credit check";

#[test]
fn embedded_dataset_summary() {
    let records = load().expect("load embedded dataset");
    let summary = aggregate(&records);

    assert_eq!(summary.total, 55);
    assert_eq!(summary.subsidiary_count, 35);
    assert_eq!(summary.standalone_count, 20);
    assert_eq!(summary.compliant_count, 38);
    assert_eq!(summary.non_compliant_count, 17);
    assert!((summary.compliance_rate - 38.0 / 55.0 * 100.0).abs() < 1e-9);
    assert!(views::subsidiary_majority(&summary));
}

#[test]
fn embedded_dataset_is_deterministic() {
    let first = aggregate(&load().unwrap());
    let second = aggregate(&load().unwrap());
    assert_eq!(first, second);
    assert_eq!(first.compliance_rate.to_bits(), second.compliance_rate.to_bits());
}

#[test]
fn embedded_dataset_placeholders_become_null() {
    let records = load().unwrap();
    let undated = records
        .iter()
        .filter(|r| r.credit_assessment_date.is_none())
        .count();
    assert_eq!(undated, 6);
    assert!(records.iter().all(|r| r.initial_signing_date.is_some()));

    let eureka = records
        .iter()
        .find(|r| r.name == "Genade P2 - Eureka Booster")
        .unwrap();
    assert_eq!(eureka.initial_signing_date, NaiveDate::from_ymd_opt(2023, 10, 3));
}

#[test]
fn riverside_is_compliant() {
    let input = format!("{}\nRiverside,22.10.2020,16.10.2020,Standalone,Yes\n", HEADER);
    let records = load_from_reader(input.as_bytes()).unwrap();

    assert_eq!(records[0].org_structure, OrgStructure::Standalone);
    assert_eq!(records[0].credit_assessment_date, NaiveDate::from_ymd_opt(2020, 10, 16));
    assert_eq!(classify(&records[0]), ComplianceStatus::Compliant);
}

#[test]
fn bracken_timbers_is_non_compliant() {
    let input = format!(
        "{}\nBracken Timbers,31.03.2021,Credit assessment data is not detailed on Salesforce,Standalone,Cannot locate credit check information on the Google Drive\n",
        HEADER
    );
    let records = load_from_reader(input.as_bytes()).unwrap();

    assert_eq!(records[0].initial_signing_date, NaiveDate::from_ymd_opt(2021, 3, 31));
    assert!(records[0].credit_assessment_date.is_none());
    assert_eq!(classify(&records[0]), ComplianceStatus::NonCompliant);
}

#[test]
fn missing_optional_columns_load_as_null() {
    let input = "Client Name,Subsidiary or a standalone\nReyno Ridge,Standalone\nGenade 1,Subsidiary\n";
    let records = load_from_reader(input.as_bytes()).unwrap();

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record.initial_signing_date.is_none());
        assert!(record.credit_assessment_date.is_none());
        assert_eq!(record.external_credit_check, "");
        assert_eq!(classify(record), ComplianceStatus::NonCompliant);
    }
    assert_eq!(records[1].org_structure, OrgStructure::Subsidiary);

    let summary = aggregate(&records);
    assert_eq!(summary.compliant_count, 0);
    assert_eq!(summary.non_compliance_rate, 100.0);
}

#[test]
fn missing_client_name_column_fails() {
    let input = format!(
        "{}\n22.10.2020,16.10.2020,Standalone,Yes\n",
        "Date of initial contract signing,Date of final credit assessment completed,Subsidiary or a standalone,External credit check"
    );
    let err = load_from_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(err, DashboardError::Csv(_)));
}

#[test]
fn toyota_without_check_is_non_compliant() {
    let records = load().unwrap();
    let toyota = records.iter().find(|r| r.name == "Toyota HQ").unwrap();
    assert!(toyota.credit_assessment_date.is_some());
    assert_eq!(toyota.compliance_status(), ComplianceStatus::NonCompliant);
}

#[test]
fn export_reloads_with_same_metrics() {
    let records = load().unwrap();
    let csv = export::to_csv_string(&records).unwrap();
    assert!(csv.lines().next().unwrap().ends_with(",Compliance Status"));
    assert_eq!(csv.lines().count(), 56);

    let reloaded = load_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(reloaded.len(), records.len());
    assert_eq!(aggregate(&reloaded), aggregate(&records));
    for (a, b) in records.iter().zip(&reloaded) {
        assert_eq!(a.name, b.name);
        assert_eq!(classify(a), classify(b));
    }
}

#[test]
fn compliance_view_matches_summary() {
    let state = AppState::load(&Config::default()).unwrap();
    let bars = views::compliance_distribution(state.records());

    assert_eq!(bars[0].status, ComplianceStatus::Compliant);
    assert_eq!(bars[0].count, state.summary().compliant_count);
    assert_eq!(bars[1].count, state.summary().non_compliant_count);
    assert_eq!(views::timeline(state.records()).len(), 55);
}

#[test]
fn upload_missing_pep_column_is_rejected() {
    let input = "Client Name,Directors Details (Confidential),Country,Province/State,City,Industry Summary,ESG Summary,Credit Risk Rating,Media Hits?,Additional Notes,Completion Status\nRiverside,,South Africa,Gauteng,Pretoria,Retail,,Low,No,,Completed\n";

    match load_screening(input.as_bytes()) {
        Err(DashboardError::MissingColumns(columns)) => {
            assert_eq!(columns, vec!["PEP Match?".to_string()]);
        }
        other => panic!("expected missing column error, got {:?}", other),
    }
}
