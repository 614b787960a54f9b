use std::str::FromStr;

use models::{BalanceReport, BalanceResult, ComputationMode, MonthEntry, default_generation_markers};
use rust_decimal::Decimal;

use crate::error::{AmountField, EngineError, Result};

/// Optional sign, digits, optional `.digits`. No exponents, no digit separators.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(int_part.is_empty() && frac_part.is_empty()) && all_digits(int_part) && all_digits(frac_part)
}

/// Parses a form amount. Whitespace around the number is ignored; anything else
/// that is not a plain decimal is rejected.
pub fn parse_amount(raw: &str, field: AmountField, index: u32) -> Result<Decimal> {
    let parse_error = || EngineError::Parse {
        field,
        index,
        value: raw.to_string(),
    };
    let trimmed = raw.trim();
    if !is_plain_decimal(trimmed) {
        return Err(parse_error());
    }
    Decimal::from_str(trimmed).map_err(|_| parse_error())
}

/// Computes per-month balances for a batch of entries.
///
/// An entry is in generation mode when its computation type contains one of the
/// configured markers (case-sensitive); every other entry is in consumption mode.
#[derive(Debug, Clone)]
pub struct BalanceCalculator {
    generation_markers: Vec<String>,
}

impl Default for BalanceCalculator {
    fn default() -> Self {
        Self::new(default_generation_markers())
    }
}

impl BalanceCalculator {
    pub fn new(generation_markers: Vec<String>) -> Self {
        Self { generation_markers }
    }

    pub fn mode_for(&self, computation_type: &str) -> ComputationMode {
        if self
            .generation_markers
            .iter()
            .any(|marker| computation_type.contains(marker.as_str()))
        {
            ComputationMode::Generation
        } else {
            ComputationMode::Consumption
        }
    }

    /// All-or-nothing: the first bad entry fails the whole batch.
    pub fn calculate(&self, entries: &[MonthEntry]) -> Result<BalanceReport> {
        let mut results = Vec::with_capacity(entries.len());
        let mut labels = Vec::with_capacity(entries.len());

        for (entry, index) in entries.iter().zip(1u32..) {
            let resource = parse_amount(&entry.resource_value, AmountField::Resource, index)?;
            let requirement =
                parse_amount(&entry.requirement_value, AmountField::Requirement, index)?;
            let balance = self
                .mode_for(&entry.computation_type)
                .balance(resource, requirement)
                .ok_or(EngineError::Overflow { index })?;

            labels.push(entry.month_label.clone());
            results.push(BalanceResult {
                resource,
                requirement,
                balance,
                month_index: index,
            });
        }

        results.sort_by_key(|r| r.month_index);
        Ok(BalanceReport { results, labels })
    }
}
