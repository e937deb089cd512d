use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

/// Offset-carrying formats PostgREST and hand-written seeds use besides RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
/// Zone-less timestamps are read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Store-assigned identifier; numeric or textual depending on the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfferId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OfferId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for OfferId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// A promotional listing. Only `id` and `created_at` are interpreted; every
/// other column is kept as-is for the page components.
///
/// `created_at` is `None` when the column is missing, null or unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: OfferId,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl OfferRecord {
    pub fn new(id: impl Into<OfferId>, created_at: DateTime<Utc>) -> Self {
        Self { id: id.into(), created_at: Some(created_at), attributes: Map::new() }
    }

    /// Decodes a JSON array of rows (or `null`, read as no rows).
    ///
    /// Rows that are not offers are logged and skipped; the rest are kept.
    ///
    /// # Errors
    /// Fails only when the document itself is not an array or `null`.
    pub fn decode_rows(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let rows: Option<Vec<Value>> = serde_json::from_str(json)?;

        let records = rows
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed offer row");
                    None
                },
            })
            .collect();
        Ok(records)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// `title` column, if present and textual.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.attribute("title").and_then(Value::as_str)
    }

    /// Sorts most recently created first; undated rows go last and ties keep
    /// their order.
    pub fn sort_newest_first(records: &mut [Self]) {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.to_utc());
    }
    if let Some(at) = OFFSET_FORMATS.iter().find_map(|f| DateTime::parse_from_str(raw, f).ok()) {
        return Some(at.to_utc());
    }
    NAIVE_FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok()).map(|at| at.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rows_keep_unknown_columns() {
        let json = r#"{
            "id": 7,
            "created_at": "2025-03-01T10:00:00+00:00",
            "title": "Geneva to Nice",
            "price": 12500
        }"#;
        let record: OfferRecord = serde_json::from_str(json).expect("valid row");

        assert_eq!(record.id, OfferId::Number(7));
        assert_eq!(record.created_at, Some(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()));
        assert_eq!(record.title(), Some("Geneva to Nice"));
        assert_eq!(record.attribute("price"), Some(&Value::from(12500)));
        assert_eq!(record.attributes.len(), 2);
    }

    #[test]
    fn textual_ids_are_accepted() {
        let json = r#"{"id": "a1b2", "created_at": "2025-03-01T10:00:00Z"}"#;
        let record: OfferRecord = serde_json::from_str(json).expect("valid row");
        assert_eq!(record.id.to_string(), "a1b2");
    }

    #[test]
    fn missing_or_null_timestamps_stay_undated() {
        let missing: OfferRecord = serde_json::from_str(r#"{"id": 1}"#).expect("id is enough");
        let null: OfferRecord =
            serde_json::from_str(r#"{"id": 2, "created_at": null}"#).expect("null timestamp");
        let garbage: OfferRecord =
            serde_json::from_str(r#"{"id": 3, "created_at": "yesterday"}"#).expect("unparsable timestamp");

        assert_eq!(missing.created_at, None);
        assert_eq!(null.created_at, None);
        assert_eq!(garbage.created_at, None);
        assert!(null.attribute("created_at").is_none());
    }

    #[test]
    fn postgres_text_timestamps_are_understood() {
        let expected = Some(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap());
        for raw in ["2025-03-01 10:00:00+00", "2025-03-01 12:00:00.000+02:00", "2025-03-01T10:00:00"] {
            let json = format!(r#"{{"id": 1, "created_at": "{raw}"}}"#);
            let record: OfferRecord = serde_json::from_str(&json).expect("valid row");
            assert_eq!(record.created_at, expected, "{raw}");
        }
    }

    #[test]
    fn mixed_batches_keep_their_good_rows() {
        let json = r#"[
            {"id": 1, "created_at": "2025-03-01T10:00:00+00:00", "title": "Geneva to Nice"},
            {"id": 2, "created_at": null},
            {"id": {"nested": true}, "created_at": "2025-03-02T10:00:00Z"},
            {"created_at": "2025-03-03T10:00:00Z"},
            "not a row"
        ]"#;
        let records = OfferRecord::decode_rows(json).expect("array document");

        let ids: Vec<_> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(records[0].title(), Some("Geneva to Nice"));
    }

    #[test]
    fn null_documents_are_empty_and_objects_are_rejected() {
        assert!(OfferRecord::decode_rows("null").expect("null document").is_empty());
        assert!(OfferRecord::decode_rows(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn sorting_puts_newest_first() {
        let day = |d| Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap();
        let mut undated = OfferRecord::new(4, day(4));
        undated.created_at = None;
        let mut records =
            vec![OfferRecord::new(1, day(1)), undated, OfferRecord::new(3, day(3)), OfferRecord::new(2, day(2))];

        OfferRecord::sort_newest_first(&mut records);
        let ids: Vec<_> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["3", "2", "1", "4"]);
    }
}
