//! Terminal renderer for the compliance dashboard

use anyhow::Context;
use compliance_dashboard::{
    config::OutputFormat,
    export,
    loader::DATE_FORMAT,
    types::CONFIRMED,
    upload::ScreeningReport,
    views::{self, DashboardView},
    AppState, Config, MetricsSummary,
};
use std::fs::File;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::info!("Starting {} ({} view)", config.service_name, config.view);

    let state = AppState::load(&config).context("loading client data")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Json => {
            let screening = state.screening().map(|report| &report.summary);
            writeln!(out, "{}", export::report_json(state.summary(), screening)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Client Compliance Dashboard")?;
            writeln!(out, "Views: {}", view_list())?;
            writeln!(out)?;
            render(&mut out, &state, &config)?;

            if let Some(report) = state.screening() {
                writeln!(out)?;
                render_screening(&mut out, report)?;
            }
        }
    }

    if let Some(path) = &config.export_path {
        let file = File::create(path)
            .with_context(|| format!("creating export file {}", path.display()))?;
        export::write_csv(file, state.records())?;
        tracing::info!("Exported {} records to {}", state.records().len(), path.display());
    }

    out.flush()?;
    Ok(())
}

fn view_list() -> String {
    DashboardView::ALL
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render<W: Write>(out: &mut W, state: &AppState, config: &Config) -> io::Result<()> {
    writeln!(out, "== {} ==", config.view.title())?;
    match config.view {
        DashboardView::Summary => render_summary(out, state.summary()),
        DashboardView::Compliance => render_compliance(out, state),
        DashboardView::Timeline => render_timeline(out, state),
        DashboardView::DataTable => render_table(out, state, config),
    }
}

fn render_summary<W: Write>(out: &mut W, summary: &MetricsSummary) -> io::Result<()> {
    writeln!(out, "Total Clients:  {}", summary.total)?;
    writeln!(out, "Subsidiaries:   {}", summary.subsidiary_count)?;
    writeln!(out, "Standalone:     {}", summary.standalone_count)?;
    writeln!(
        out,
        "Compliant:      {} ({:.1}%)",
        summary.compliant_count, summary.compliance_rate
    )?;
    writeln!(
        out,
        "Non-Compliant:  {} ({:.1}%)",
        summary.non_compliant_count, summary.non_compliance_rate
    )?;
    if views::subsidiary_majority(summary) {
        writeln!(out, "Most clients are subsidiaries, indicating strong corporate group affiliations.")?;
    }
    Ok(())
}

fn render_compliance<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    let bars = views::compliance_distribution(state.records());
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bar in &bars {
        let width = bar.count * 40 / max;
        writeln!(out, "{:<14} {:>4} {}", bar.status.as_str(), bar.count, "#".repeat(width))?;
    }
    writeln!(
        out,
        "Compliant clients have a completed credit assessment and a confirmed external credit check."
    )
}

fn render_timeline<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    let points = views::timeline(state.records());
    if points.is_empty() {
        return writeln!(out, "No valid contract signing dates available for the timeline.");
    }
    for point in points {
        writeln!(out, "{}  {}", point.signing_date.format(DATE_FORMAT), point.name)?;
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, state: &AppState, config: &Config) -> io::Result<()> {
    let mut rows = views::table_rows(state.records());
    if let Some(column) = config.table_sort {
        views::sort_table(&mut rows, column, config.table_order);
    }

    let date = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    writeln!(
        out,
        "{:<40} {:<10} {:<10} {:<10} {:<6} {}",
        "Client Name", "Signed", "Assessed", "Structure", "Check", "Status"
    )?;
    for row in &rows {
        let check = if row.record.external_credit_check == CONFIRMED { "Yes" } else { "No" };
        writeln!(
            out,
            "{:<40} {:<10} {:<10} {:<10} {:<6} {}",
            row.record.name,
            date(row.record.initial_signing_date),
            date(row.record.credit_assessment_date),
            row.record.org_structure.as_str(),
            check,
            row.status
        )?;
    }
    Ok(())
}

fn render_screening<W: Write>(out: &mut W, report: &ScreeningReport) -> io::Result<()> {
    let summary = &report.summary;
    writeln!(out, "== Uploaded Screening ==")?;
    writeln!(out, "Total Clients:  {}", summary.total)?;
    writeln!(
        out,
        "Completed:      {} ({:.1}%)",
        summary.completed_count, summary.completion_rate
    )?;
    writeln!(out, "PEP Matches:    {}", summary.pep_match_count)?;
    writeln!(out, "Media Hits:     {}", summary.media_hit_count)?;
    writeln!(out, "Credit Risk Rating:")?;
    for (rating, count) in &summary.risk_rating_counts {
        writeln!(out, "  {:<12} {}", rating, count)?;
    }
    Ok(())
}
