//! Task model and DTOs.
//!
//! Wire field names are camelCase (`endDate`, `dailyStatus`); the free-text
//! category travels as `type`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use daygrid_core::day_range::DailyStatus;
use daygrid_core::types::DbId;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// ISO week number of `date`, client-computed and stored as sent.
    pub week: Option<i32>,
    /// Legacy coarse status. Settable, but per-day rendering ignores it.
    pub status: Option<String>,
    pub daily_status: Json<DailyStatus>,
}

/// DTO for creating a new task.
///
/// Every field is optional at the serde level so a missing required field
/// surfaces as a validation error rather than a body-decode failure; the
/// handler checks presence of `title`, `type`, and `date`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub week: Option<i32>,
    pub status: Option<String>,
    pub daily_status: Option<DailyStatus>,
}

/// DTO for partially updating a task.
///
/// Scalar fields distinguish "omitted" (outer `None`, leave unchanged)
/// from "explicitly null" (`Some(None)`, apply the null). A bare `Option`
/// collapses the two, so present-but-null is captured by a custom
/// deserializer. `daily_status` entries are merged into the stored map;
/// keys not mentioned survive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "explicit_null")]
    pub title: Option<Option<String>>,
    #[serde(rename = "type", default, deserialize_with = "explicit_null")]
    pub task_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub week: Option<Option<i32>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub status: Option<Option<String>>,
    pub daily_status: Option<DailyStatus>,
}

impl UpdateTask {
    /// Fields every task must carry. Returns the first one this payload
    /// tries to set to an explicit `null`, if any.
    pub fn null_required_field(&self) -> Option<&'static str> {
        if matches!(self.title, Some(None)) {
            return Some("title");
        }
        if matches!(self.task_type, Some(None)) {
            return Some("type");
        }
        if matches!(self.date, Some(None)) {
            return Some("date");
        }
        None
    }
}

/// Deserialize a present field (including an explicit `null`) as
/// `Some(inner)`; an absent field falls back to the `default` of `None`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_deserialize_as_unset() {
        let update: UpdateTask = serde_json::from_str("{}").unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.end_date, None);
        assert!(update.daily_status.is_none());
    }

    #[test]
    fn explicit_null_deserializes_as_set_null() {
        let update: UpdateTask = serde_json::from_str(r#"{"endDate": null}"#).unwrap();
        assert_eq!(update.end_date, Some(None));
    }

    #[test]
    fn explicit_value_deserializes_as_set_value() {
        let update: UpdateTask = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert_eq!(update.title, Some(Some(String::new())));
    }

    #[test]
    fn null_title_is_flagged_as_required() {
        let update: UpdateTask = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(update.null_required_field(), Some("title"));
    }

    #[test]
    fn null_end_date_is_not_flagged() {
        let update: UpdateTask = serde_json::from_str(r#"{"endDate": null}"#).unwrap();
        assert_eq!(update.null_required_field(), None);
    }

    #[test]
    fn task_serializes_with_camel_case_wire_names() {
        let task = Task {
            id: 1,
            title: "Review".to_string(),
            task_type: "Coding".to_string(),
            date: "2024-03-01".parse().unwrap(),
            end_date: Some("2024-03-03".parse().unwrap()),
            week: Some(9),
            status: Some("incomplete".to_string()),
            daily_status: Json(DailyStatus::new()),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "Coding");
        assert_eq!(json["endDate"], "2024-03-03");
        assert!(json["dailyStatus"].is_object());
    }
}
