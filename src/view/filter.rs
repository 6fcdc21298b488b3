use chrono::NaiveDate;

use crate::error::{Result, ViewError};
use crate::record::Record;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current search/filter parameters of a view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.category.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }

    fn has_date_bound(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether `record` passes every active predicate.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_category(record) && self.matches_date(record)
    }

    fn matches_text<R: Record>(&self, record: &R) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category<R: Record>(&self, record: &R) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => record
                .category()
                .is_some_and(|value| value.eq_ignore_ascii_case(wanted)),
        }
    }

    fn matches_date<R: Record>(&self, record: &R) -> bool {
        if !self.has_date_bound() {
            return true;
        }
        // Unparsable or missing dates never satisfy an active range.
        let Some(date) = record.date().and_then(parse_record_date) else {
            tracing::warn!(
                entity = R::ENTITY,
                key = record.key(),
                date = record.date().unwrap_or(""),
                "record excluded from date range, date not parsable"
            );
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Parse a user-supplied date bound, naming the flag in the error.
pub fn parse_date_arg(flag: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ViewError::InvalidDate {
        flag,
        value: value.to_string(),
    })
}

/// Matching records in their original order.
pub fn filter<'a, R: Record>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    let matched: Vec<&R> = records.iter().filter(|r| criteria.matches(*r)).collect();
    tracing::debug!(
        entity = R::ENTITY,
        total = records.len(),
        matched = matched.len(),
        "filter applied"
    );
    matched
}
