use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Which amount of a month entry failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Resource,
    Requirement,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Resource => f.write_str("resourceValue"),
            AmountField::Requirement => f.write_str("requirementValue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{field} of entry {index} is not a number: {value:?}")]
    Parse {
        field: AmountField,
        index: u32,
        value: String,
    },

    #[error("Balance of entry {index} is out of range")]
    Overflow { index: u32 },

    #[error("Invalid date: {0:?}")]
    DateParse(String),

    #[error("Month range spans {count} month(s), at least {min} required")]
    TooFewMonths { count: usize, min: u32 },

    #[error("Month range spans more than {max} months")]
    TooManyMonths { max: u32 },
}

impl EngineError {
    /// Stable machine-readable name used in failure envelopes
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Parse { .. } | EngineError::Overflow { .. } => "parse_error",
            EngineError::DateParse(_) => "date_parse_error",
            EngineError::TooFewMonths { .. } | EngineError::TooManyMonths { .. } => "range_error",
        }
    }
}
