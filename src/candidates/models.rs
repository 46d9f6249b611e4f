// src/candidates/models.rs

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};

/// One persisted job-candidate submission.
///
/// Records are immutable after creation; the only lifecycle operations are
/// create (upload handler), read (list handler) and destroy (delete handler).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Assigned by MongoDB on insert. Always `None` when the record is
    /// serialized for insertion, so the custom hex serializer only ever runs
    /// for API responses.
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_object_id_hex"
    )]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    #[serde(with = "rfc3339_millis")]
    pub registered_at: DateTime<Utc>,
}

/// Text fields collected from the multipart submission form
#[derive(Debug, Default)]
pub struct CandidateForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub linkedin_profile: Option<String>,
}

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize)]
pub struct CandidateFilters {
    pub position: Option<String>,
}

fn serialize_object_id_hex<S>(oid: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match oid {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Fixed-width RFC 3339 timestamps (millisecond precision, `Z` suffix).
///
/// Stored in MongoDB as strings; the fixed width keeps lexicographic order
/// identical to chronological order, which the list endpoint's sort relies
/// on.
pub mod rfc3339_millis {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
