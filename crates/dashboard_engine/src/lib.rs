//! Month-range and balance computations behind the resource/requirement dashboard.
//!
//! The computations are pure, with no shared state; only [`report`] touches the
//! filesystem. The HTTP layer wraps these calls and turns [`EngineError`] into
//! failure envelopes.

pub mod balance;
pub mod chart;
pub mod dates;
pub mod error;
pub mod months;
pub mod report;

pub use balance::{BalanceCalculator, parse_amount};
pub use chart::bar_chart;
pub use dates::{month_label, parse_calendar_date};
pub use error::{AmountField, EngineError, Result};
pub use months::{MonthCursor, MonthRangeGenerator};
