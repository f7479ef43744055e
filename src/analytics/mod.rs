//! Aggregate-query engine over team compositions
//!
//! Pure, synchronous computations layered as validation -> period filter
//! -> group-and-count -> mode selection. Every operation receives its own
//! input snapshot and produces a fresh result; nothing here touches
//! storage or shared state.

pub mod aggregate;
pub mod error;
pub mod period;
pub mod queries;
pub mod validate;

pub use aggregate::{group_and_count, mode};
pub use error::AnalyticsError;
pub use period::filter_by_period;
pub use queries::{
    count_by_franchise, count_by_role, most_common_role, most_common_team, most_famous_franchise,
    most_used_member, team_of_date,
};
pub use validate::{validate_date, validate_date_range, validate_teams};
