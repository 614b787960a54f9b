use models::{BalanceReport, BarChartConfig, ChartSeries};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

fn month_name(month_index: u32) -> Option<&'static str> {
    let slot = usize::try_from(month_index).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(slot).copied()
}

fn category_for(label: Option<&String>, month_index: u32) -> String {
    match label.map(|l| l.trim()).filter(|l| !l.is_empty()) {
        Some(label) => label.to_string(),
        None => month_name(month_index)
            .map(str::to_string)
            .unwrap_or_else(|| month_index.to_string()),
    }
}

fn bar_series(name: &str, values: impl Iterator<Item = Decimal>) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        kind: "bar".to_string(),
        data: values.map(|v| v.to_f64().unwrap_or_default()).collect(),
    }
}

/// Builds the bar chart configuration handed to the client-side charting library:
/// one category per month and the resource, requirement and balance series.
pub fn bar_chart(report: &BalanceReport) -> BarChartConfig {
    let categories = report
        .results
        .iter()
        .enumerate()
        .map(|(pos, r)| category_for(report.labels.get(pos), r.month_index))
        .collect();

    let results = &report.results;
    BarChartConfig {
        categories,
        series: vec![
            bar_series("Recurso", results.iter().map(|r| r.resource)),
            bar_series("Requisito", results.iter().map(|r| r.requirement)),
            bar_series("Balanço", results.iter().map(|r| r.balance)),
        ],
    }
}
