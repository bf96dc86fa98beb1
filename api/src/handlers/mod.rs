//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod assign;
pub mod contributions;
pub mod fairness;
pub mod members;

use axum::extract::{rejection::QueryRejection, Query};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::AppError;

pub use assign::{auto_assign, preview_auto_assign};
pub use contributions::get_contributions;
pub use fairness::get_fairness;
pub use members::{get_member_badges, get_member_score, get_member_streak};

/// Optional `?date=YYYY-MM-DD` reference date for week-based answers
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

impl DateQuery {
    /// The requested date, or today in UTC
    pub fn reference_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Resolve the reference date, reporting a malformed `?date=` as a JSON 400
pub fn reference_date(
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<NaiveDate, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(query.reference_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_query() {
        let query: DateQuery = serde_json::from_str(r#"{"date": "2026-02-11"}"#).unwrap();
        assert_eq!(
            query.reference_date(),
            NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
        );
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let query = DateQuery::default();
        assert_eq!(query.reference_date(), Utc::now().date_naive());
    }

    #[test]
    fn reference_date_from_extracted_query() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let query = Ok(Query(DateQuery { date: Some(date) }));
        assert_eq!(reference_date(query).unwrap(), date);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result: Result<DateQuery, _> = serde_json::from_str(r#"{"date": "2026-W07"}"#);
        assert!(result.is_err());
    }
}
