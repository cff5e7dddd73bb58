//! Ticket query construction and validation.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use reqwest::Url;

use crate::error::{NetworkError, ValidationError};
use crate::stations::StationLookup;

/// Category letters selectable on the command line:
/// 高铁, 动车, 特快, 快速, 直达.
pub const CATEGORIES: [char; 5] = ['g', 'd', 't', 'k', 'z'];

/// Filters and fare selection derived from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Empty means every category is shown.
    pub categories: BTreeSet<char>,
    pub student: bool,
}

impl QueryOptions {
    pub fn new(categories: impl IntoIterator<Item = char>, student: bool) -> Self {
        Self {
            categories: categories
                .into_iter()
                .flat_map(char::to_lowercase)
                .collect(),
            student,
        }
    }

    pub fn accepts(&self, category: Option<char>) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        category.map_or(false, |c| self.categories.contains(&c))
    }
}

/// Fare class sent as `purpose_codes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeCode {
    Adult,
    Student,
}

impl PurposeCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurposeCode::Adult => "ADULT",
            PurposeCode::Student => "0X00",
        }
    }
}

impl fmt::Display for PurposeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated query: both stations resolved and the date not in the past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub purpose: PurposeCode,
    pub date: NaiveDate,
    pub from_code: String,
    pub to_code: String,
}

impl TicketQuery {
    /// Checks run in order: origin, destination, date format, date not
    /// before `today`.
    pub fn new(
        stations: &impl StationLookup,
        from: &str,
        to: &str,
        date: &str,
        today: NaiveDate,
        student: bool,
    ) -> Result<Self, ValidationError> {
        let from_code = stations
            .code(from)
            .ok_or_else(|| ValidationError::UnknownFromStation(from.to_string()))?;
        let to_code = stations
            .code(to)
            .ok_or_else(|| ValidationError::UnknownToStation(to.to_string()))?;

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        if date < today {
            return Err(ValidationError::PastDate(date));
        }

        let purpose = if student {
            PurposeCode::Student
        } else {
            PurposeCode::Adult
        };

        Ok(Self {
            purpose,
            date,
            from_code: from_code.to_string(),
            to_code: to_code.to_string(),
        })
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("purpose_codes", self.purpose.to_string()),
            ("queryDate", self.date.format("%Y-%m-%d").to_string()),
            ("from_station", self.from_code.clone()),
            ("to_station", self.to_code.clone()),
        ]
    }

    pub fn url(&self, base_url: &str) -> Result<Url, NetworkError> {
        Url::parse_with_params(base_url, self.query_pairs()).map_err(|e| NetworkError::Endpoint {
            message: e.to_string(),
        })
    }
}
