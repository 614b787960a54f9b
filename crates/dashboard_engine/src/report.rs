use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::Local;
use models::{BalanceRequest, BalanceResult, BarChartConfig, Settings};
use serde::{Deserialize, Serialize};

use crate::{balance::BalanceCalculator, chart::bar_chart};

/// Offline rendition of a balance calculation, written next to the dashboard assets
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceReportFile {
    pub generated_at: String,
    pub data: Vec<BalanceResult>,
    pub labels: Vec<String>,
    pub chart: BarChartConfig,
}

/// Reads month entries (bare list or `{ "data": [...] }`) and computes the report
pub fn generate_report(input_path: &Path, settings: &Settings) -> Result<BalanceReportFile> {
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("read entries file {}", input_path.display()))?;
    let request: BalanceRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parse entries JSON in {}", input_path.display()))?;

    let calculator = BalanceCalculator::new(settings.generation_markers.clone());
    let report = calculator.calculate(&request.into_entries())?;
    let chart = bar_chart(&report);

    Ok(BalanceReportFile {
        generated_at: Local::now().to_rfc3339(),
        data: report.results,
        labels: report.labels,
        chart,
    })
}

pub fn write_report_json(report: &BalanceReportFile, out_path: &Path) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(out_path, json).with_context(|| format!("write {}", out_path.display()))?;
    Ok(())
}
