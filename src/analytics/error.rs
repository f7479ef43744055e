use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while answering aggregate queries
///
/// All variants are expected domain failures, recoverable by the caller;
/// the HTTP boundary maps them to 4xx responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("a required date parameter is missing")]
    DateMissing,

    #[error("no team found for date {0}")]
    DateNotFound(NaiveDate),

    #[error("the team list is empty")]
    TeamListEmpty,

    #[error("no teams found within the requested period")]
    PeriodEmpty,

    #[error("aggregation produced no entries")]
    EmptyAggregate,
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
