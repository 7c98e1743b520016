//! Compliance classification and metrics aggregation

use crate::types::{ClientRecord, ComplianceStatus, MetricsSummary, CONFIRMED};
use tracing::info;

/// Classify a single client.
///
/// Compliant requires both a completed credit assessment date and an external
/// credit check recorded exactly as "Yes". Any other check value, including
/// free-text notes about a missing check, counts as not confirmed.
pub fn classify(record: &ClientRecord) -> ComplianceStatus {
    if record.credit_assessment_date.is_none() {
        return ComplianceStatus::NonCompliant;
    }
    if record.external_credit_check != CONFIRMED {
        return ComplianceStatus::NonCompliant;
    }
    ComplianceStatus::Compliant
}

/// Count the rows satisfying `predicate`.
pub fn count_matching<T, F>(rows: &[T], predicate: F) -> usize
where
    F: Fn(&T) -> bool,
{
    rows.iter().filter(|row| predicate(*row)).count()
}

/// Percentage of `part` in `total`; 0 for an empty set.
pub fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Build the summary for a client record set.
pub fn aggregate(records: &[ClientRecord]) -> MetricsSummary {
    let total = records.len();
    let subsidiary_count = count_matching(records, ClientRecord::is_subsidiary);
    let compliant_count =
        count_matching(records, |r| classify(r) == ComplianceStatus::Compliant);

    let compliance_rate = rate(compliant_count, total);
    let non_compliance_rate = if total == 0 { 0.0 } else { 100.0 - compliance_rate };

    let summary = MetricsSummary {
        total,
        subsidiary_count,
        standalone_count: total - subsidiary_count,
        compliant_count,
        non_compliant_count: total - compliant_count,
        compliance_rate,
        non_compliance_rate,
    };

    info!(
        "Aggregated {} clients: {} compliant ({:.2}%)",
        summary.total, summary.compliant_count, summary.compliance_rate
    );

    summary
}
