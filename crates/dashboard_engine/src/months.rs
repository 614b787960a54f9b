use chrono::NaiveDate;
use models::{DateRange, MonthRangeSettings};

use crate::dates::{month_label, next_month, parse_calendar_date};
use crate::error::{EngineError, Result};

/// Walks from `start` one calendar month at a time while the cursor is not past `end`
#[derive(Debug, Clone)]
pub struct MonthCursor {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl MonthCursor {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }
}

impl Iterator for MonthCursor {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = next_month(current);
        Some(current)
    }
}

/// Produces `MM/yyyy` labels for an inclusive date range, rejecting spans outside
/// the configured month bounds.
#[derive(Debug, Clone)]
pub struct MonthRangeGenerator {
    min_months: u32,
    max_months: u32,
}

impl Default for MonthRangeGenerator {
    fn default() -> Self {
        Self::new(&MonthRangeSettings::default())
    }
}

impl MonthRangeGenerator {
    pub fn new(bounds: &MonthRangeSettings) -> Self {
        Self {
            min_months: bounds.min_months,
            max_months: bounds.max_months,
        }
    }

    pub fn generate(&self, range: &DateRange) -> Result<Vec<String>> {
        let start = parse_calendar_date(&range.start)?;
        let end = parse_calendar_date(&range.end)?;
        self.generate_between(start, end)
    }

    pub fn generate_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<String>> {
        // One past the upper bound is enough to know the range is too long
        let limit = self.max_months as usize + 1;
        let labels: Vec<String> = MonthCursor::new(start, end)
            .take(limit)
            .map(month_label)
            .collect();

        let count = labels.len();
        if count > self.max_months as usize {
            return Err(EngineError::TooManyMonths {
                max: self.max_months,
            });
        }
        if count < self.min_months as usize {
            return Err(EngineError::TooFewMonths {
                count,
                min: self.min_months,
            });
        }
        Ok(labels)
    }
}
