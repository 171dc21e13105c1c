//! Teacher record as owned by the data layer

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A teacher known to the system
///
/// This is the full internal record. API responses never serialize it
/// directly; they go through a schema that whitelists the exposed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TeacherRecord")]
pub struct Teacher {
    /// Unique identifier for this teacher
    pub id: i64,

    /// The user account this teacher belongs to
    pub user_id: i64,

    /// Display name
    pub name: String,

    /// Contact address, internal only
    pub email: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,

    /// When this record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Serialized form of a teacher, timestamps optional
///
/// A missing `created_at` takes the update time, a missing `updated_at`
/// takes the creation time, and a record carrying neither is stamped once.
#[derive(Deserialize)]
struct TeacherRecord {
    id: i64,
    user_id: i64,
    name: String,
    email: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<TeacherRecord> for Teacher {
    fn from(record: TeacherRecord) -> Self {
        let (created_at, updated_at) = match (record.created_at, record.updated_at) {
            (Some(created), Some(updated)) => (created, updated),
            (Some(created), None) => (created, created),
            (None, Some(updated)) => (updated, updated),
            (None, None) => {
                let now = Utc::now();
                (now, now)
            }
        };

        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            email: record.email,
            created_at,
            updated_at,
        }
    }
}

impl Teacher {
    pub fn new(id: i64, user_id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Teacher {
    fn resource_name_singular() -> &'static str {
        "teacher"
    }

    fn id(&self) -> i64 {
        self.id
    }
}
