use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

// Settings models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthRangeSettings {
	pub min_months: u32,
	pub max_months: u32,
}

impl Default for MonthRangeSettings {
	fn default() -> Self {
		Self { min_months: 3, max_months: 12 }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub host: String,
	pub port: u16,
	/// Directory with the dashboard page and its scripts; nothing is served when unset
	pub static_dir: Option<PathBuf>,
	pub month_range: MonthRangeSettings,
	/// Substrings of `computationType` that switch an entry to generation mode
	pub generation_markers: Vec<String>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 3000,
			static_dir: None,
			month_range: MonthRangeSettings::default(),
			generation_markers: default_generation_markers(),
		}
	}
}

pub fn default_generation_markers() -> Vec<String> {
	vec!["Geracao".to_string(), "Geração".to_string(), "Generation".to_string()]
}

// Raw input entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
	#[serde(alias = "Recurso", deserialize_with = "amount_text")]
	pub resource_value: String,
	#[serde(alias = "Requisito", deserialize_with = "amount_text")]
	pub requirement_value: String,
	#[serde(default, alias = "TxMes")]
	pub month_label: String,
	#[serde(alias = "Tipo")]
	pub computation_type: String,
}

impl MonthEntry {
	pub fn new(resource: &str, requirement: &str, label: &str, computation_type: &str) -> Self {
		Self {
			resource_value: resource.to_string(),
			requirement_value: requirement.to_string(),
			month_label: label.to_string(),
			computation_type: computation_type.to_string(),
		}
	}
}

/// Amounts arrive either as form text or as plain JSON numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
	Text(String),
	Number(serde_json::Number),
}

fn amount_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(match RawAmount::deserialize(deserializer)? {
		RawAmount::Text(text) => text,
		RawAmount::Number(number) => expand_exponent(number.to_string()),
	})
}

/// JSON numbers may print as `1e+16`; spell them out so the amount grammar accepts them.
/// Values that do not fit a decimal are left as-is and fail to parse later.
fn expand_exponent(text: String) -> String {
	if !text.contains(['e', 'E']) {
		return text;
	}
	Decimal::from_scientific(&text).map(|d| d.normalize().to_string()).unwrap_or(text)
}

/// Body of the balance endpoint: either a bare list or the `{ "data": [...] }` wrapper
/// posted by the dashboard page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BalanceRequest {
	Entries(Vec<MonthEntry>),
	Wrapped { data: Vec<MonthEntry> },
}

impl BalanceRequest {
	pub fn into_entries(self) -> Vec<MonthEntry> {
		match self {
			BalanceRequest::Entries(entries) => entries,
			BalanceRequest::Wrapped { data } => data,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
	#[serde(alias = "Inicio")]
	pub start: String,
	#[serde(alias = "Fim")]
	pub end: String,
}

// Output models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputationMode {
	Generation,
	Consumption,
}

impl ComputationMode {
	/// Signed balance for one month under this mode, `None` on overflow
	pub fn balance(self, resource: Decimal, requirement: Decimal) -> Option<Decimal> {
		match self {
			ComputationMode::Generation => requirement.checked_sub(resource),
			ComputationMode::Consumption => resource.checked_sub(requirement),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
	#[serde(with = "rust_decimal::serde::float")]
	pub resource: Decimal,
	#[serde(with = "rust_decimal::serde::float")]
	pub requirement: Decimal,
	#[serde(with = "rust_decimal::serde::float")]
	pub balance: Decimal,
	pub month_index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
	pub results: Vec<BalanceResult>,
	pub labels: Vec<String>,
}

// Chart collaborator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub data: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
	pub categories: Vec<String>,
	pub series: Vec<ChartSeries>,
}
