use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::date::{format_date, parse_date};
use super::number::parse_leading_int;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Body of `POST /api/users/{id}/exercises`, as received.
///
/// Every field is optional here so that missing and malformed input can be
/// reported with the service's own messages by [`CreateExercise::validate`].
#[derive(Debug, Default, Deserialize)]
pub struct CreateExercise {
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// An exercise whose description and duration have been checked.
///
/// The date stays raw until the owner has been found, so an unknown user is
/// reported before a malformed date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    pub date: Option<String>,
}

impl CreateExercise {
    pub fn validate(self) -> Result<NewExercise> {
        let description = self.description.filter(|d| !d.is_empty());
        let duration = self.duration.filter(|d| !d.is_empty());

        let (Some(description), Some(duration)) = (description, duration) else {
            return Err(AppError::Validation(
                "description and duration required".to_string(),
            ));
        };

        let duration = parse_leading_int(&duration)
            .ok_or_else(|| AppError::Validation("duration must be a number".to_string()))?;

        Ok(NewExercise {
            description,
            duration,
            date: self.date.filter(|d| !d.is_empty()),
        })
    }
}

impl NewExercise {
    /// The date to store: the parsed input, or now when none was given.
    pub fn resolve_date(&self) -> Result<DateTime<Utc>> {
        match self.date.as_deref() {
            None => Ok(Utc::now()),
            Some(raw) => parse_date(raw)
                .ok_or_else(|| AppError::Validation("invalid date format".to_string())),
        }
    }
}

/// Response to a successful append: the owner plus the new entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseAdded {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(&exercise.date),
        }
    }
}

/// Form bodies always carry strings, JSON bodies may carry a bare number.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Integer(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form(description: Option<&str>, duration: Option<&str>, date: Option<&str>) -> CreateExercise {
        CreateExercise {
            description: description.map(String::from),
            duration: duration.map(String::from),
            date: date.map(String::from),
        }
    }

    fn validation_message(result: Result<NewExercise>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_full_form() {
        let exercise = form(Some("run"), Some("30"), Some("2023-01-15"))
            .validate()
            .unwrap();

        assert_eq!(exercise.description, "run");
        assert_eq!(exercise.duration, 30);
        assert_eq!(
            exercise.resolve_date().unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_date_resolves_to_now() {
        for date in [None, Some("")] {
            let exercise = form(Some("run"), Some("30"), date).validate().unwrap();
            assert_eq!(exercise.date, None);

            let before = Utc::now();
            let resolved = exercise.resolve_date().unwrap();
            assert!(before <= resolved && resolved <= Utc::now());
        }
    }

    #[test]
    fn test_validate_missing_fields() {
        for (description, duration) in [
            (None, Some("30")),
            (Some("run"), None),
            (Some(""), Some("30")),
            (Some("run"), Some("")),
        ] {
            let msg = validation_message(form(description, duration, None).validate());
            assert_eq!(msg, "description and duration required");
        }
    }

    #[test]
    fn test_validate_non_numeric_duration() {
        for duration in ["abc", "   ", "min30"] {
            let msg = validation_message(form(Some("run"), Some(duration), None).validate());
            assert_eq!(msg, "duration must be a number", "duration {:?}", duration);
        }
    }

    #[test]
    fn test_validate_reads_leading_integer_of_duration() {
        let exercise = form(Some("run"), Some("12.5"), None).validate().unwrap();
        assert_eq!(exercise.duration, 12);

        let exercise = form(Some("run"), Some("30min"), None).validate().unwrap();
        assert_eq!(exercise.duration, 30);
    }

    #[test]
    fn test_invalid_date_fails_on_resolve() {
        for date in ["yesterday", "   "] {
            let exercise = form(Some("run"), Some("30"), Some(date)).validate().unwrap();
            match exercise.resolve_date() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, "invalid date format"),
                other => panic!("expected validation error for {:?}, got {:?}", date, other),
            }
        }
    }

    #[test]
    fn test_json_float_duration_keeps_integer_part() {
        let parsed: CreateExercise =
            serde_json::from_str(r#"{"description": "swim", "duration": 12.5}"#).unwrap();
        assert_eq!(parsed.validate().unwrap().duration, 12);
    }

    #[test]
    fn test_json_duration_may_be_a_number() {
        let parsed: CreateExercise =
            serde_json::from_str(r#"{"description": "swim", "duration": 45}"#).unwrap();
        assert_eq!(parsed.duration.as_deref(), Some("45"));
        assert_eq!(parsed.validate().unwrap().duration, 45);
    }

    #[test]
    fn test_json_missing_duration_is_none() {
        let parsed: CreateExercise = serde_json::from_str(r#"{"description": "swim"}"#).unwrap();
        assert!(parsed.duration.is_none());
    }

    #[test]
    fn test_log_entry_renders_calendar_date() {
        let exercise = Exercise {
            description: "run".to_string(),
            duration: 30,
            date: Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
        };
        let entry = LogEntry::from(&exercise);
        assert_eq!(entry.date, "Wed Feb 01 2023");
        assert_eq!(entry.duration, 30);
    }
}
