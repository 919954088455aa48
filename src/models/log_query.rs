use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::date::{end_of_day, parse_date};
use super::number::parse_leading_int;
use super::{Exercise, LogEntry};

/// Raw query string of `GET /api/users/{id}/logs`.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// A date filter bound. Values that do not parse are `Ignored` rather than
/// rejected, so a bad `from` or `to` simply widens the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Applied(DateTime<Utc>),
    Ignored,
}

/// Head limit on the filtered log. Only a positive leading integer is
/// `Applied`; `"1.5"` limits to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Applied(usize),
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    pub from: DateBound,
    pub to: DateBound,
    pub limit: Limit,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            from: DateBound::Ignored,
            to: DateBound::Ignored,
            limit: Limit::Ignored,
        }
    }
}

impl LogFilter {
    pub fn from_params(params: &LogParams) -> Self {
        let from = match params.from.as_deref().and_then(parse_date) {
            Some(at) => DateBound::Applied(at),
            None => DateBound::Ignored,
        };

        // `to` is inclusive of the whole day it names
        let to = match params.to.as_deref().and_then(parse_date) {
            Some(at) => DateBound::Applied(end_of_day(at)),
            None => DateBound::Ignored,
        };

        let limit = match params.limit.as_deref().and_then(parse_leading_int) {
            Some(n) if n > 0 => Limit::Applied(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => Limit::Ignored,
        };

        Self { from, to, limit }
    }

    /// Filter by `from`, then `to`, then take the head `limit`, preserving
    /// insertion order. The input slice is left untouched.
    pub fn apply<'a>(&self, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
        let matching = exercises
            .iter()
            .filter(|e| match self.from {
                DateBound::Applied(from) => e.date >= from,
                DateBound::Ignored => true,
            })
            .filter(|e| match self.to {
                DateBound::Applied(to) => e.date <= to,
                DateBound::Ignored => true,
            });

        match self.limit {
            Limit::Applied(n) => matching.take(n).collect(),
            Limit::Ignored => matching.collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}
